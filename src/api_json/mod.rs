use serde::{Deserialize, Serialize};

use crate::models::Student;

/// Body for `POST /match`: the roster to run roommate matching over.
///
/// Expected JSON shape:
/// ```json
/// {
///   "students": [
///     {
///       "name": "Alice", "age": 20, "gender": "Female", "year": 2,
///       "major": "CS", "gpa": 3.8,
///       "roommate_preferences": ["Bob"],
///       "internships": ["Google"]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterRequest {
    pub students: Vec<Student>,
}

/// Body for `POST /referral`. When `apply_matching` is set, a matching run
/// happens first and the graph is built against it, so roommate bonuses
/// shorten paths.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralRequest {
    pub students: Vec<Student>,
    pub start: String,
    pub internship: String,
    #[serde(default)]
    pub apply_matching: bool,
}

/// Body for `POST /pods`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PodsRequest {
    pub students: Vec<Student>,
    pub capacity: usize,
    #[serde(default)]
    pub apply_matching: bool,
}

/// Body for `POST /pipeline`: run the whole flow over a roster file on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct PipelineRequest {
    pub roster_path: String,
    #[serde(default = "default_pod_capacity")]
    pub pod_capacity: usize,
}

fn default_pod_capacity() -> usize {
    4
}

pub fn parse_roster_request(json_str: &str) -> Result<RosterRequest, serde_json::Error> {
    serde_json::from_str(json_str)
}

pub fn parse_referral_request(json_str: &str) -> Result<ReferralRequest, serde_json::Error> {
    serde_json::from_str(json_str)
}

pub fn parse_pods_request(json_str: &str) -> Result<PodsRequest, serde_json::Error> {
    serde_json::from_str(json_str)
}
