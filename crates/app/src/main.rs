//! Trekway web server binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trekway_infrastructure::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;

    tracing::info!("Starting Trekway v{}", env!("CARGO_PKG_VERSION"));

    trekway::serve(&settings).await?;

    Ok(())
}
