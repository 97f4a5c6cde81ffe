use crate::model::{Order, OrderId, OrderStatus, SimpleProduct, UserId};
use crate::order_store::{OrderError, OrderStore};
use std::sync::Arc;
use tracing::{info, instrument};

/// Validating façade over the [`OrderStore`].
///
/// Unlike the store, the service only allows status changes the order lifecycle permits
/// (see [`OrderStatus::can_transition_to`]). Ids come from the store, so any number of
/// services over one store never collide.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<OrderStore>,
}

impl OrderService {
    pub fn new(orders: Arc<OrderStore>) -> Self {
        Self { orders }
    }

    /// Places a new order for `user_id` in status [`OrderStatus::Created`].
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn create(&self, user_id: UserId, items: Vec<SimpleProduct>) -> Result<Order, OrderError> {
        if user_id.is_empty() {
            return Err(OrderError::InvalidArgument("user id is empty".to_string()));
        }
        if items.is_empty() {
            return Err(OrderError::InvalidArgument("order has no items".to_string()));
        }

        let order = self.orders.create_with_fresh_id(user_id, items);
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Moves an order to `status` if the lifecycle allows it.
    #[instrument(skip(self))]
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        self.orders
            .update_status_if(id, status, |current, next| current.can_transition_to(next))
    }

    pub fn find(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.orders.find(id)
    }

    pub fn find_all(&self) -> Vec<Order> {
        self.orders.find_all()
    }

    #[instrument(skip(self))]
    pub fn find_all_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError> {
        if user_id.is_empty() {
            return Err(OrderError::InvalidArgument("user id is empty".to_string()));
        }
        Ok(self.orders.find_all_for_user(user_id))
    }
}
