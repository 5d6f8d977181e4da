//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so that the in-memory store can later be
//! replaced by a database-backed implementation without touching services or
//! handlers.
//!
//! # Available Repositories
//!
//! - [`PostRepository`] - Post CRUD with cascading delete
//! - [`CommentRepository`] - Comment lookup, creation and removal
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod comment_repository;
pub mod post_repository;

pub use comment_repository::CommentRepository;
pub use post_repository::PostRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
