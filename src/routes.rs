//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Liveness check
//! - `/api/*`       - REST API for posts and comments
//! - anything else  - 404 `NOT_FOUND` envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become 500 `INTERNAL_ERROR` envelopes

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Unknown paths and known paths with an unsupported method both answer with the
/// 404 envelope. See [`normalized_router`] for the variant that also accepts
/// trailing slashes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(fallback_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}

/// Wraps [`app_router`] so that `/api/posts/` is routed like `/api/posts`.
///
/// Path normalization must run before routing, so it wraps the router rather
/// than being added as a router layer.
pub fn normalized_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}
