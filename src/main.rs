//! Telemetry API Server - Headless HTTP service
//!
//! This binary serves the model performance catalog over HTTP. The
//! catalog is compiled-in literal data, so the process has no state
//! beyond the listener itself.
//!
//! # Usage
//! ```sh
//! SERVER_PORT=8080 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `SERVER_BIND_ADDRESS` - Listener bind address (default: 127.0.0.1)
//! - `SERVER_PORT` - Listener port (default: 8080)

use anyhow::{Context, Result};
use deepracer_telemetry::config::Config;
use deepracer_telemetry::interfaces::http;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Telemetry server {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.socket_addr();

    let app = http::router();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Serving model performance catalog on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received. Exiting...");
}
