//! Leaderboard server binary for the Organic Life game.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `organic-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the leaderboard state, seeding sample entries if configured
//! 4. Serve the HTTP API until terminated

mod error;

use std::path::Path;
use std::sync::Arc;

use organic_core::config::LoggingSettings;
use organic_core::{GameConfig, GameError, LogFormat, SystemClock};
use organic_leaderboard::{AppState, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "organic-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH))
        .map_err(GameError::from)
        .map_err(AppError::from)?;
    init_tracing(&config.logging);

    info!(
        host = %config.server.host,
        port = config.server.port,
        capacity = config.leaderboard.capacity,
        seed_entries = config.leaderboard.seed_entries,
        "organic-server starting"
    );

    let state = Arc::new(AppState::from_settings(
        &config.leaderboard,
        Arc::new(SystemClock),
    ));
    let server_config = ServerConfig::from(&config.server);

    start_server(&server_config, state)
        .await
        .map_err(AppError::from)?;

    info!("organic-server stopped");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
