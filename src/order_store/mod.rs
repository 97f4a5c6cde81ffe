//! # Order Store
//!
//! Orders keyed by a caller-generated [`OrderId`].
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//!
//! [`OrderStore::create`] records whatever it is given and overwrites on an id collision.
//! [`OrderStore::create_with_fresh_id`] draws the next free id from the store's own
//! sequence instead. Status transitions are not validated here;
//! [`OrderService`](crate::services::OrderService) enforces the lifecycle on top.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Order, OrderId, OrderStatus, SimpleProduct, UserId};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Store of orders.
#[derive(Default)]
pub struct OrderStore {
    inner: ResourceStore<Order>,
    // Last sequence number handed out. Only advanced under the write lock.
    last_id: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            inner: ResourceStore::with_records(orders),
            last_id: AtomicU64::new(0),
        }
    }

    /// Stores `order` under its id. An existing order with the same id is overwritten.
    pub fn create(&self, order: Order) -> Order {
        if let Some(previous) = self.inner.insert(order.clone()) {
            warn!(order_id = %previous.id, "Order id reused; previous order overwritten");
        }
        order
    }

    /// Stores a new order in status [`OrderStatus::Created`] under the next unused id.
    ///
    /// Ids are `order_000001`, `order_000002`, ... Zero-padding keeps lexical order equal
    /// to creation order. Ids already taken (seeded or created directly) are skipped.
    pub fn create_with_fresh_id(&self, user_id: UserId, items: Vec<SimpleProduct>) -> Order {
        let order = self.inner.write(|orders| {
            let id = loop {
                let seq = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
                let id = OrderId(format!("order_{:06}", seq));
                if !orders.contains_key(&id) {
                    break id;
                }
            };
            let order = Order::new(id.clone(), user_id, items);
            orders.insert(id, order.clone());
            order
        });
        info!(order_id = %order.id, user_id = %order.user_id, "Order created");
        order
    }

    /// Sets the status of an existing order. Any status may follow any other.
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.update_status_if(id, status, |_, _| true)
    }

    /// Sets the status of an existing order if `allowed(current, status)` holds.
    ///
    /// The predicate runs under the same write lock as the update, so the status it
    /// inspects is the one being replaced.
    pub fn update_status_if(
        &self,
        id: &OrderId,
        status: OrderStatus,
        allowed: impl FnOnce(OrderStatus, OrderStatus) -> bool,
    ) -> Result<Order, OrderError> {
        let result: Result<Order, OrderError> = self.inner.write(|orders| {
            let order = orders
                .get_mut(id)
                .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
            if !allowed(order.status, status) {
                return Err(OrderError::InvalidTransition {
                    from: order.status,
                    to: status,
                });
            }
            order.status = status;
            Ok(order.clone())
        });

        match &result {
            Ok(_) => info!(order_id = %id, %status, "Status updated"),
            Err(e) => warn!(order_id = %id, error = %e, "Status update failed"),
        }
        result
    }

    pub fn find(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.inner
            .get(id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Returns every order, sorted by id ascending.
    pub fn find_all(&self) -> Vec<Order> {
        self.inner.snapshot_sorted_by_id(|_| true)
    }

    /// Returns the orders owned by `user_id`, sorted by id ascending.
    pub fn find_all_for_user(&self, user_id: &UserId) -> Vec<Order> {
        self.inner.snapshot_sorted_by_id(|order| &order.user_id == user_id)
    }
}
