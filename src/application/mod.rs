//! Application layer services implementing the request contract.
//!
//! Services consume repository traits, run the field validators and turn
//! missing resources into errors. Handlers only shape HTTP responses.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Post CRUD
//! - [`services::comment_service::CommentService`] - Comments nested under posts

pub mod services;
