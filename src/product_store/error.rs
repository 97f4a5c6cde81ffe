//! Error types for the Product store.

use thiserror::Error;

/// Errors that can occur during stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Adding the requested quantity would overflow the stock counter.
    #[error("Stock quantity overflow for product {0}")]
    QuantityOverflow(String),

    /// A required argument was empty or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
