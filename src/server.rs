//! HTTP server initialization and runtime setup.
//!
//! Builds the store, wires the services and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryStore;
use crate::routes::normalized_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state for the given configuration.
pub fn build_state(config: &Config) -> AppState {
    let store = if config.seed_data {
        tracing::info!("Store initialized with seed data");
        InMemoryStore::seeded()
    } else {
        tracing::info!("Store initialized empty");
        InMemoryStore::new()
    };

    AppState::new(Arc::new(store))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    let app = normalized_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Blog API server running on port {}", config.port);
    tracing::info!("API available at http://localhost:{}/api", config.port);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
