//! Error types for the Order store.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A required argument was empty or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The order lifecycle does not allow this status change.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}
