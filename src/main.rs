// --- Campus Connection Graph - main entry point ---

use campusgraph::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== Campus Connection Graph (API) ===");
    let bind = "127.0.0.1:8080";
    println!("Starting server at http://{}", bind);
    run_server(bind).await
}
