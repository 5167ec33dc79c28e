use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;

use crate::algorithm::{
    assign_roommates, default_strength, find_referral_path, form_pods, run_campus_pipeline,
    StudentGraph,
};
use crate::api_json::{PipelineRequest, PodsRequest, ReferralRequest, RosterRequest};
use crate::models::{Matching, Student};

/// Builds the graph the way the caller asked: against a fresh matching run
/// when `apply_matching` is set, attribute-only otherwise.
fn build_graph(
    students: &[Student],
    apply_matching: bool,
) -> Result<StudentGraph, crate::models::CampusError> {
    let matching: Option<Matching> = if apply_matching {
        Some(assign_roommates(students)?)
    } else {
        None
    };
    StudentGraph::build(students, default_strength(matching.as_ref()))
}

/// POST /match
/// Runs roommate matching over the posted roster.
async fn match_handler(body: web::Json<RosterRequest>) -> impl Responder {
    let req = body.into_inner();
    match assign_roommates(&req.students) {
        Ok(matching) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "matched_count": matching.matched_count(),
            "pairs": matching.pairs(),
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// POST /referral
/// Shortest referral path from `start` to any holder of `internship`.
async fn referral_handler(body: web::Json<ReferralRequest>) -> impl Responder {
    let req = body.into_inner();
    let graph = match build_graph(&req.students, req.apply_matching) {
        Ok(g) => g,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };
    match find_referral_path(&graph, &req.students, &req.start, &req.internship) {
        Ok(path) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "found": !path.is_empty(),
            "path": path,
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// POST /pods
/// Greedy pod partition of the posted roster.
async fn pods_handler(body: web::Json<PodsRequest>) -> impl Responder {
    let req = body.into_inner();
    let graph = match build_graph(&req.students, req.apply_matching) {
        Ok(g) => g,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };
    match form_pods(&graph, req.capacity) {
        Ok(pods) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "pod_count": pods.len(),
            "pods": pods,
        })),
        Err(e) => HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    }
}

/// POST /pipeline
/// Full flow (load roster file, match, build graph, form pods).
async fn pipeline_handler(body: web::Json<PipelineRequest>) -> impl Responder {
    let req = body.into_inner();
    match run_campus_pipeline(&req.roster_path, req.pod_capacity) {
        Ok(report) => HttpResponse::Ok().json(json!({"status": "ok", "report": report})),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"status": "error", "error": format!("{}", e)})),
    }
}

/// GET /status
async fn status_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "time": chrono::Local::now().to_rfc3339(),
    }))
}

/// GET /help — worked example bodies for every POST endpoint.
async fn help_handler() -> impl Responder {
    let example_students = json!([
        {
            "name": "Alice", "age": 20, "gender": "Female", "year": 2,
            "major": "CS", "gpa": 3.8,
            "roommate_preferences": ["Bob"],
            "internships": ["Google"]
        },
        {
            "name": "Bob", "age": 20, "gender": "Male", "year": 2,
            "major": "CS", "gpa": 3.5,
            "roommate_preferences": ["Alice"],
            "internships": []
        }
    ]);

    HttpResponse::Ok().json(json!({
        "description": "Campus connection API: roommate matching, referral paths and pod formation over a posted roster.",
        "post_match_example": {"students": example_students.clone()},
        "post_referral_example": {
            "students": example_students.clone(),
            "start": "Bob",
            "internship": "Google",
            "apply_matching": true
        },
        "post_pods_example": {"students": example_students, "capacity": 2},
        "post_pipeline_example": {"roster_path": "data/roster.txt", "pod_capacity": 4},
        "note": "apply_matching=true runs roommate matching first and builds the graph against it, so roommate bonuses count toward edge weights."
    }))
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .route("/match", web::post().to(match_handler))
            .route("/referral", web::post().to(referral_handler))
            .route("/pods", web::post().to(pods_handler))
            .route("/pipeline", web::post().to(pipeline_handler))
            .route("/status", web::get().to(status_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
