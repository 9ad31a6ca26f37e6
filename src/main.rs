use std::error::Error;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present.
    // A missing file is fine; an unreadable or invalid one is not.
    let dotenv_loaded = match dotenvy::dotenv() {
        Ok(_) => true,
        Err(err) if err.not_found() => false,
        Err(err) => return Err(err.into()),
    };

    tracing_subscriber::registry()
        .with(api::telemetry::env_filter("info"))
        .with(api::telemetry::layer())
        .init();

    info!(dotenv_loaded, "logging initialised");

    api::start().await?;

    Ok(())
}
