//! Repository implementations.
//!
//! - [`InMemoryStore`] - process-local store implementing both
//!   [`crate::domain::repositories::PostRepository`] and
//!   [`crate::domain::repositories::CommentRepository`]
//! - [`seed`] - sample records loaded at startup

pub mod memory_store;
pub mod seed;

pub use memory_store::InMemoryStore;
