//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures. Each entity comes with companion types:
//!
//! - `NewPost`, `NewComment` - validated input for creating records
//! - `PostPatch` - validated partial update; it has no `id` or `created_at`
//!   field, so those can never be overwritten
//! - `PostInput`, `CommentInput` - raw caller payloads before validation

pub mod comment;
pub mod post;

pub use comment::{Comment, CommentInput, NewComment};
pub use post::{NewPost, Post, PostInput, PostPatch, PostStatus};
