//! Generic storage framework for keyed records.
//!
//! This module provides the building blocks every concrete store is made from.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement to be stored
//! - [`ResourceStore`] - Generic collection guarded by one reader/writer lock

pub mod core;

// Re-export core types for convenience
pub use self::core::*;
