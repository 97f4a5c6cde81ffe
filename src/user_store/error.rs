//! Error types for the User store.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found, or the supplied credentials matched nobody.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A required argument was empty or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A password could not be hashed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
