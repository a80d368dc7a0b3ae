//! Segment Monitor - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load(None)?;
    init_logging(config.log_json);

    info!("=== Segment Monitor v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting fuzzy anomaly assessment service...");

    run_server(config).await?;

    Ok(())
}
