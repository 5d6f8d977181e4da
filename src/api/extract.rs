//! Request extractors that report failures in the API error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError::Validation`].
///
/// Behaves like [`axum::Json`], except that malformed or mistyped bodies produce
/// `400 {"error":{"code":"VALIDATION_ERROR",...}}` rather than axum's plain-text
/// rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
