//! # Catalog Server
//!
//! Entry point: load configuration, install logging, serve.

use anyhow::Context;
use catalog_config::ConfigLoader;
use catalog_server::{app, logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = tracing::subscriber::with_default(
        logging::bootstrap_subscriber(),
        ConfigLoader::from_default_location,
    )
    .context("Failed to load configuration")?
    .into_config();

    logging::init(&config.observability);

    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);

    app::run(config).await.context("Server terminated with an error")?;
    Ok(())
}
