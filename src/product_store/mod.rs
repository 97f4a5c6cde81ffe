//! # Product Store
//!
//! Stock records keyed by [`ProductId`], with the invariant that a product's
//! `quantity` never drops below zero.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//!
//! ## Stock Operations
//!
//! ```rust,ignore
//! // Restock (inserts the product if it's new)
//! let product = products.add(Product::new("P0001", "Lightsaber", 999.99, 5))?;
//!
//! // Take stock out; fails without touching the record if there isn't enough
//! let product = products.withdraw(&SimpleProduct::new("P0001", 3))?;
//! ```
//!
//! Both run their lookup and their mutation inside one write-lock acquisition, so two
//! concurrent withdrawals can never both pass the sufficiency check.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{Product, ProductId, SimpleProduct};
use std::collections::hash_map::Entry;
use tracing::{debug, info, warn};

/// Store of stock records.
#[derive(Default)]
pub struct ProductStore {
    inner: ResourceStore<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: ResourceStore::with_records(products),
        }
    }

    pub fn find(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.inner
            .get(id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Returns every product, in no particular order.
    pub fn find_all(&self) -> Vec<Product> {
        self.inner.snapshot()
    }

    /// Replaces the whole record at `product.id`.
    pub fn store(&self, product: Product) -> Product {
        self.inner.insert(product.clone());
        product
    }

    /// Adds stock.
    ///
    /// An unknown id is inserted as given. A known id gets `delta.quantity` added to its
    /// stock, and its name and description replaced by the ones in `delta`.
    pub fn add(&self, delta: Product) -> Result<Product, ProductError> {
        debug!(?delta, "Add");
        let result: Result<Product, ProductError> = self.inner.write(|products| {
            match products.entry(delta.id.clone()) {
                Entry::Occupied(mut slot) => {
                    let stored = slot.get_mut();
                    stored.quantity = stored
                        .quantity
                        .checked_add(delta.quantity)
                        .ok_or_else(|| ProductError::QuantityOverflow(delta.id.to_string()))?;
                    stored.name = delta.name;
                    stored.description = delta.description;
                    Ok(stored.clone())
                }
                Entry::Vacant(slot) => Ok(slot.insert(delta).clone()),
            }
        });

        match &result {
            Ok(product) => info!(product_id = %product.id, quantity = product.quantity, "Stock added"),
            Err(e) => warn!(error = %e, "Add failed"),
        }
        result
    }

    /// Removes `delta.quantity` units of `delta.product_id` from stock.
    ///
    /// Fails with [`ProductError::InsufficientStock`] and leaves the record unchanged if
    /// fewer units are stored than requested.
    pub fn withdraw(&self, delta: &SimpleProduct) -> Result<Product, ProductError> {
        debug!(?delta, "Withdraw");
        let result: Result<Product, ProductError> = self.inner.write(|products| {
            let stored = products
                .get_mut(&delta.product_id)
                .ok_or_else(|| ProductError::NotFound(delta.product_id.to_string()))?;

            if stored.quantity < delta.quantity {
                return Err(ProductError::InsufficientStock {
                    requested: delta.quantity,
                    available: stored.quantity,
                });
            }

            stored.quantity -= delta.quantity;
            Ok(stored.clone())
        });

        match &result {
            Ok(product) => info!(product_id = %product.id, quantity = product.quantity, "Stock withdrawn"),
            Err(e) => warn!(product_id = %delta.product_id, error = %e, "Withdraw failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProductStore {
        ProductStore::with_products(vec![Product::new("P1", "Lightsaber", 999.99, 10)
            .with_description("The perfect lightsaber")
            .with_category("Weapons")])
    }

    #[test]
    fn test_find_unknown_product_is_not_found() {
        assert_eq!(
            store().find(&"P404".into()),
            Err(ProductError::NotFound("P404".to_string()))
        );
    }

    #[test]
    fn test_withdraw_decrements_then_rejects_oversell() {
        let store = store();

        let product = store.withdraw(&SimpleProduct::new("P1", 7)).unwrap();
        assert_eq!(product.quantity, 3);

        let result = store.withdraw(&SimpleProduct::new("P1", 5));
        assert_eq!(
            result,
            Err(ProductError::InsufficientStock { requested: 5, available: 3 })
        );
        assert_eq!(store.find(&"P1".into()).unwrap().quantity, 3);
    }

    #[test]
    fn test_withdraw_exact_stock_leaves_zero() {
        let store = store();
        assert_eq!(store.withdraw(&SimpleProduct::new("P1", 10)).unwrap().quantity, 0);
        assert!(store.withdraw(&SimpleProduct::new("P1", 1)).is_err());
    }

    #[test]
    fn test_withdraw_unknown_product_is_not_found() {
        let result = store().withdraw(&SimpleProduct::new("P404", 1));
        assert_eq!(result, Err(ProductError::NotFound("P404".to_string())));
    }

    #[test]
    fn test_add_inserts_unknown_product() {
        let store = ProductStore::new();
        let product = store.add(Product::new("P2", "BB 8", 12499.0, 3)).unwrap();

        assert_eq!(product.quantity, 3);
        assert_eq!(store.find(&"P2".into()).unwrap(), product);
    }

    #[test]
    fn test_add_increments_and_overwrites_text_fields() {
        let store = store();
        let delta = Product::new("P1", "Lightsaber v2", 0.0, 5).with_description("Now in blue");

        let product = store.add(delta).unwrap();
        assert_eq!(product.quantity, 15);
        assert_eq!(product.name, "Lightsaber v2");
        assert_eq!(product.description, "Now in blue");
        // Untouched fields keep their stored values
        assert_eq!(product.price, 999.99);
        assert_eq!(product.category, "Weapons");
    }

    #[test]
    fn test_add_overflow_leaves_record_unchanged() {
        let store = store();
        let result = store.add(Product::new("P1", "Lightsaber", 0.0, u32::MAX));

        assert_eq!(result, Err(ProductError::QuantityOverflow("P1".to_string())));
        let stored = store.find(&"P1".into()).unwrap();
        assert_eq!(stored.quantity, 10);
        assert_eq!(stored.description, "The perfect lightsaber");
    }

    #[test]
    fn test_store_replaces_whole_record() {
        let store = store();
        store.store(Product::new("P1", "Replica", 10.0, 1));

        let stored = store.find(&"P1".into()).unwrap();
        assert_eq!(stored.name, "Replica");
        assert_eq!(stored.quantity, 1);
        assert_eq!(stored.category, "");
    }
}
