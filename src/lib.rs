//! # Blog API
//!
//! A small REST API for blog posts and nested comments, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and field validators
//! - **Application Layer** ([`application`]) - Services enforcing the request contract
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and seed data
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! Every response is wrapped in an envelope: `{"data": ...}` on success and
//! `{"error": {"code": ..., "message": ...}}` on failure.
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//! curl http://localhost:3000/api/posts
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CommentService, PostService};
    pub use crate::domain::entities::{Comment, NewComment, NewPost, Post, PostPatch, PostStatus};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryStore;
    pub use crate::state::AppState;
}
