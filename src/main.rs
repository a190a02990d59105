//! Prints today's dashboard as JSON, built from the bundled sample data.
//!
//! Usage: `cycle-companion [CONFIG_FILE]`

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cycle_companion::adapters::{SampleContentCatalog, SampleCycleDataProvider, SampleProfileReader};
use cycle_companion::application::{GetDashboardHandler, GetDashboardQuery};
use cycle_companion::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    config.validate()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.is_json() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }

    let now = chrono::Local::now().naive_local();
    tracing::info!(%now, radius = config.ring.radius, "building dashboard");

    let handler = GetDashboardHandler::new(
        Arc::new(SampleCycleDataProvider::anchored_at(now.date())),
        Arc::new(SampleContentCatalog::new()),
        Arc::new(SampleProfileReader::default()),
        config.ring.into_geometry(),
    );

    let overview = handler.handle(GetDashboardQuery { now }).await?;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}
