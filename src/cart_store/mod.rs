//! # Cart Store
//!
//! One ordered item list per user, with upsert and removal by product id.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for the validating service layer
//!
//! Every `put`/`remove` reads the cart, decides, and writes it back inside one write-lock
//! acquisition. Two concurrent puts for the same user therefore both land.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Cart, ProductId, SimpleProduct, UserId};
use tracing::{debug, info};

/// Store of shopping carts.
#[derive(Default)]
pub struct CartStore {
    inner: ResourceStore<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's cart, storing an empty one the first time a user is seen.
    pub fn get_cart(&self, user_id: &UserId) -> Vec<SimpleProduct> {
        if let Some(cart) = self.inner.get(user_id) {
            return cart.items;
        }

        // Another caller may have created it between the two acquisitions
        self.inner.write(|carts| {
            carts
                .entry(user_id.clone())
                .or_insert_with(|| {
                    debug!(%user_id, "Cart created");
                    Cart::new(user_id.clone())
                })
                .items
                .clone()
        })
    }

    /// Sets `product_id` to `quantity` in the user's cart, appending it if absent.
    pub fn put(&self, user_id: &UserId, product_id: ProductId, quantity: u32) -> Vec<SimpleProduct> {
        let items = self.inner.write(|carts| {
            let cart = carts
                .entry(user_id.clone())
                .or_insert_with(|| Cart::new(user_id.clone()));
            cart.upsert(product_id.clone(), quantity);
            cart.items.clone()
        });
        info!(%user_id, %product_id, quantity, size = items.len(), "Cart item put");
        items
    }

    /// Removes `product_id` from the user's cart. Absent products are a no-op.
    pub fn remove(&self, user_id: &UserId, product_id: &ProductId) -> Vec<SimpleProduct> {
        let (removed, items) = self.inner.write(|carts| {
            let cart = carts
                .entry(user_id.clone())
                .or_insert_with(|| Cart::new(user_id.clone()));
            let removed = cart.remove(product_id);
            (removed, cart.items.clone())
        });
        info!(%user_id, %product_id, removed, size = items.len(), "Cart item removed");
        items
    }
}
