//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
