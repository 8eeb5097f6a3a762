use std::sync::Arc;

use tokio::{net::TcpListener, sync::RwLock};

use mock_server::Store;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    // Start pre-populated, like the reference deployment.
    mock_server::run_with(listener, Arc::new(RwLock::new(Store::seeded(100)))).await
}
