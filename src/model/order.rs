//! Represents a customer order.
//!
//! Items are fixed at creation; only [`Order::status`] changes afterwards.

use crate::model::{SimpleProduct, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

string_id!(
    /// Type-safe identifier for Orders.
    OrderId
);

/// Where an order is in its lifecycle.
///
/// ```text
/// Created ──► PaymentSuccessful ──► Shipped ──► ReturnRequested ──► Returned
///    │               ▲
///    └──► PaymentError┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Created,
    PaymentSuccessful,
    PaymentError,
    Shipped,
    ReturnRequested,
    Returned,
}

impl OrderStatus {
    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// A failed payment may be retried; staying in the same status is not a transition.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Created, PaymentSuccessful)
                | (Created, PaymentError)
                | (PaymentError, PaymentSuccessful)
                | (PaymentSuccessful, Shipped)
                | (Shipped, ReturnRequested)
                | (ReturnRequested, Returned)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Created => "Created",
            OrderStatus::PaymentSuccessful => "Payment Successful",
            OrderStatus::PaymentError => "Payment Error",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::ReturnRequested => "Return Requested",
            OrderStatus::Returned => "Returned",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<SimpleProduct>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, generated by the caller
    /// * `user_id` - ID of the user placing the order
    /// * `items` - Ordered line items
    ///
    /// # Notes
    /// The order is initialized with status [`OrderStatus::Created`].
    pub fn new(id: impl Into<OrderId>, user_id: impl Into<UserId>, items: Vec<SimpleProduct>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            status: OrderStatus::Created,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_happy_path_is_allowed() {
        let path = [
            OrderStatus::Created,
            OrderStatus::PaymentSuccessful,
            OrderStatus::Shipped,
            OrderStatus::ReturnRequested,
            OrderStatus::Returned,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_illegal_transitions_are_rejected() {
        assert!(!OrderStatus::Created.can_transition_to(OrderStatus::Shipped));
        assert!(!OrderStatus::PaymentError.can_transition_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Returned.can_transition_to(OrderStatus::Created));
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Shipped));
    }

    #[test]
    fn test_failed_payment_can_be_retried() {
        assert!(OrderStatus::PaymentError.can_transition_to(OrderStatus::PaymentSuccessful));
    }

    #[test]
    fn test_display_uses_readable_names() {
        assert_eq!(OrderStatus::PaymentSuccessful.to_string(), "Payment Successful");
        assert_eq!(OrderStatus::ReturnRequested.to_string(), "Return Requested");
    }
}
