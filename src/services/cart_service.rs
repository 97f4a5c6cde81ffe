use crate::cart_store::{CartError, CartStore};
use crate::model::{ProductId, SimpleProduct, UserId};
use std::sync::Arc;
use tracing::instrument;

/// Validating façade over the [`CartStore`].
#[derive(Clone)]
pub struct CartService {
    carts: Arc<CartStore>,
}

impl CartService {
    pub fn new(carts: Arc<CartStore>) -> Self {
        Self { carts }
    }

    #[instrument(skip(self))]
    pub fn get_cart(&self, user_id: &UserId) -> Result<Vec<SimpleProduct>, CartError> {
        require_user(user_id)?;
        Ok(self.carts.get_cart(user_id))
    }

    /// Sets the quantity of `product_id` in the user's cart.
    #[instrument(skip(self))]
    pub fn put(
        &self,
        user_id: &UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Vec<SimpleProduct>, CartError> {
        require_user(user_id)?;
        require_product(&product_id)?;
        Ok(self.carts.put(user_id, product_id, quantity))
    }

    #[instrument(skip(self))]
    pub fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Vec<SimpleProduct>, CartError> {
        require_user(user_id)?;
        require_product(product_id)?;
        Ok(self.carts.remove(user_id, product_id))
    }
}

fn require_user(user_id: &UserId) -> Result<(), CartError> {
    if user_id.is_empty() {
        return Err(CartError::InvalidArgument("user id is empty".to_string()));
    }
    Ok(())
}

fn require_product(product_id: &ProductId) -> Result<(), CartError> {
    if product_id.is_empty() {
        return Err(CartError::InvalidArgument("product id is empty".to_string()));
    }
    Ok(())
}
