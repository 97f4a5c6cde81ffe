use crate::model::{ProductId, SimpleProduct, UserId};
use serde::{Deserialize, Serialize};

/// A user's shopping cart: an ordered list holding at most one line per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<SimpleProduct>,
}

impl Cart {
    /// Creates an empty cart for `user_id`.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    /// Sets the quantity for `product_id`, appending a new line if the product isn't
    /// in the cart yet. An existing quantity is replaced, not summed.
    pub fn upsert(&mut self, product_id: ProductId, quantity: u32) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = quantity,
            None => self.items.push(SimpleProduct::new(product_id, quantity)),
        }
    }

    /// Drops the line for `product_id`, keeping the order of the rest.
    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        self.items.len() != before
    }
}
