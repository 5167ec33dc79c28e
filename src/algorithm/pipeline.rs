// pipeline.rs - Orchestrator wiring the full campus flow:
//
// PHASE 1: load + validate the roster
// PHASE 2: roommate matching (deferred acceptance)
// PHASE 3: build the connection graph AFTER matching, so the roommate bonus
//          is visible to everything downstream
// PHASE 4: pod formation
//
// This is the only layer that logs; the algorithm modules stay silent and
// return structured results.

use std::error::Error;

use crate::algorithm::graph::StudentGraph;
use crate::algorithm::matching::assign_roommates;
use crate::algorithm::pods::form_pods;
use crate::algorithm::strength::default_strength;
use crate::models::{Matching, Student};
use crate::parser::parse_students_from_file;

/// Structured result of a full pipeline run.
#[derive(Debug, serde::Serialize)]
pub struct PipelineReport {
    pub student_count: usize,
    pub matched_count: usize,
    pub roommate_pairs: Vec<(String, String)>,
    pub edge_count: usize,
    pub pods: Vec<Vec<String>>,
}

/// Loads a roster file and runs matching, graph construction and pod
/// formation in order.
pub fn run_campus_pipeline(
    roster_path: &str,
    pod_capacity: usize,
) -> Result<PipelineReport, Box<dyn Error>> {
    eprintln!("[pipeline] PHASE 1: loading roster from {}", roster_path);
    let students = parse_students_from_file(roster_path)?;
    eprintln!("[pipeline]   students loaded: {}", students.len());

    run_campus_pipeline_with_students(&students, pod_capacity).map_err(Into::into)
}

/// Same pipeline over an already-validated roster (used by the API layer).
pub fn run_campus_pipeline_with_students(
    students: &[Student],
    pod_capacity: usize,
) -> Result<PipelineReport, crate::models::CampusError> {
    eprintln!("[pipeline] PHASE 2: roommate matching ({} students)", students.len());
    let matching: Matching = assign_roommates(students)?;
    eprintln!("[pipeline]   matched students: {}", matching.matched_count());

    // The graph is deliberately built after matching: the roommate bonus
    // changes edge weights, and interleaving the two silently would make
    // results depend on call order.
    eprintln!("[pipeline] PHASE 3: building connection graph (post-matching)");
    let graph = StudentGraph::build(students, default_strength(Some(&matching)))?;
    eprintln!(
        "[pipeline]   graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    eprintln!("[pipeline] PHASE 4: pod formation (capacity {})", pod_capacity);
    let pods = form_pods(&graph, pod_capacity)?;
    eprintln!("[pipeline]   pods formed: {}", pods.len());

    Ok(PipelineReport {
        student_count: students.len(),
        matched_count: matching.matched_count(),
        roommate_pairs: matching.pairs(),
        edge_count: graph.edge_count(),
        pods,
    })
}
