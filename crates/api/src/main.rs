//! Aviation Weather Risk Service - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    init_logging(&settings.logging)?;

    info!("=== AvRisk v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Model: {}", if settings.model.mock { "mock" } else { settings.model.path.as_str() });

    run_server(settings).await?;

    Ok(())
}
