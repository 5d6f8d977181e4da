//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! - [`persistence`] - In-memory repository implementation and seed data

pub mod persistence;
