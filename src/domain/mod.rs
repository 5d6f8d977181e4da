//! Domain layer containing business entities and rules.
//!
//! - [`entities`] - Posts, comments and their input types
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Field rules applied before every write
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
pub mod validation;
