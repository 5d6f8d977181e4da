//! Application error type and its HTTP envelope.
//!
//! Every failure leaving a handler is rendered as
//!
//! ```json
//! { "error": { "code": "NOT_FOUND", "message": "Post not found" } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned to clients for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Error payload nested under the `error` key.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller payload violates one or more field rules.
    #[error("{0}")]
    Validation(String),

    /// Any unexpected fault. The detail is logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a validation error from an ordered list of field violations.
    pub fn from_violations(violations: &[String]) -> Self {
        Self::Validation(violations.join(", "))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Converts the error into its client-facing payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let message = match self {
            AppError::NotFound(message) | AppError::Validation(message) => message.clone(),
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        ErrorInfo {
            code: self.code(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Unhandled internal error");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::internal("Store lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_violations_are_comma_joined() {
        let err = AppError::from_violations(&[
            "title is required".to_string(),
            "content is required".to_string(),
        ]);

        let info = err.to_error_info();
        assert_eq!(info.code, "VALIDATION_ERROR");
        assert_eq!(info.message, "title is required, content is required");
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let info = AppError::internal("mutex poisoned at store.rs").to_error_info();

        assert_eq!(info.code, "INTERNAL_ERROR");
        assert_eq!(info.message, INTERNAL_ERROR_MESSAGE);
    }
}
