// Crate root for `campusgraph`.
// Re-exports the main modules and the server entry point.
pub mod algorithm;
pub mod api_json;
pub mod chat;
pub mod models;
pub mod parser;
pub mod server;

/// Runs the HTTP server (re-export for convenient use from `main`)
pub use server::run_server;
