//! Error types for the Cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// The store itself never fails; these come from the validating
/// [`CartService`](crate::services::CartService).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A required argument was empty or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
