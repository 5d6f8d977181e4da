//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with camelCase keys. Request DTOs keep every field
//! optional and leave the rules to [`crate::domain::validation`].

pub mod comment;
pub mod envelope;
pub mod health;
pub mod post;

pub use comment::{CommentItem, CommentPayload};
pub use envelope::DataResponse;
pub use health::HealthResponse;
pub use post::{PostItem, PostPayload};
