//! Error types for system startup.

use crate::user_store::UserError;
use thiserror::Error;

/// Errors that can occur while configuring or assembling the [`StoreSystem`](super::StoreSystem).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    /// An environment variable held a value that doesn't parse for its field.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfigValue { key: &'static str, value: String },

    /// The configured Argon2 cost parameters are out of range.
    #[error("Invalid password hashing parameters: {0}")]
    InvalidHashParams(String),

    /// Seeding the user store failed.
    #[error(transparent)]
    User(#[from] UserError),
}
