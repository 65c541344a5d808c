//! Causal server binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Create the seeded in-memory field
//! 4. Serve HTTP + `WebSocket` until `Ctrl-C`

use std::sync::Arc;

use causal_server::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("causal-server starting");

    // 2. Load configuration.
    let config = ServerConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        broadcast_capacity = config.broadcast_capacity,
        cors = ?config.cors_origins,
        "Configuration loaded"
    );

    // 3. Create shared state.
    let state = Arc::new(AppState::from_config(&config));

    // 4. Serve until shutdown.
    start_server(&config, state).await?;

    Ok(())
}
