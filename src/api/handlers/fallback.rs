//! Handler for requests that match no route.

use crate::error::AppError;

/// Answers unknown paths and unsupported methods with the 404 envelope.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("Endpoint not found")
}
