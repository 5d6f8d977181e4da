//! Utility functions shared across layers.
//!
//! - [`timestamp`] - JSON timestamp formatting

pub mod timestamp;
