//! Validating façades over the stores.
//!
//! The stores assume well-formed input. These services sit in front of them, reject empty
//! identifiers and meaningless quantities with an `InvalidArgument` error, and open a
//! `tracing` span per call. Each one is a cheap `Clone` around an `Arc` to its store.

pub mod auth_service;
pub mod cart_service;
pub mod order_service;
pub mod stock_service;

pub use auth_service::*;
pub use cart_service::*;
pub use order_service::*;
pub use stock_service::*;
