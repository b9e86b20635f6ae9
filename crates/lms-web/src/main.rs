//! Web server for the LMS admin console
#![forbid(unsafe_code)]

use lms_web::{AppState, build_app};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Get configuration
    let config = lms_core::Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        lms_core::Config::default()
    });

    let state = Arc::new(AppState::new(config.clone())?);

    // Verify any persisted token before accepting traffic; failures leave
    // the session anonymous and the guard sends the user to /login.
    state.session.restore().await;

    let app = build_app(Arc::clone(&state));

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!("Starting LMS admin console on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
