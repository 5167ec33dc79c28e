// High-level module for the campus graph algorithms.
// Declares submodules (files under `src/algorithm`).
pub mod graph;
pub mod matching;
pub mod pods;
pub mod referral;
pub mod strength;
mod pipeline;

// Re-export the public API surface.
pub use graph::StudentGraph;
pub use matching::assign_roommates;
pub use pipeline::{run_campus_pipeline, run_campus_pipeline_with_students, PipelineReport};
pub use pods::form_pods;
pub use referral::find_referral_path;
pub use strength::default_strength;
