//! Slotbook upload endpoint server
//!
//! Main entry point: loads configuration, wires the file store, and serves
//! the router on the configured port.

use std::net::SocketAddr;
use std::sync::Arc;

use slotbook_api::storage::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => info!(error = %e, "no .env file loaded"),
    }

    let config = slotbook_infra::config::load()?;
    let store = Arc::new(FileStore::new(config.server.upload_dir.clone()));
    let app = slotbook_api::router(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, upload_dir = %config.server.upload_dir, "upload endpoint listening");

    axum::serve(listener, app).await?;
    Ok(())
}
