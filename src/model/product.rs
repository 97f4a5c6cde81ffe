//! Represents a stock item in the inventory.
//!
//! See [`ProductStore`](crate::product_store::ProductStore) for the rules that keep
//! `quantity` consistent under concurrent add/withdraw calls.

use serde::{Deserialize, Serialize};

string_id!(
    /// Type-safe identifier for Products.
    ProductId
);

/// A stock record. `quantity` is the number of units available for withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name
    /// * `price` - Product price
    /// * `quantity` - Available stock quantity
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            image_url: String::new(),
            price,
            quantity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// A line item: a product id and a quantity.
///
/// In a cart the quantity is the desired amount, in an order the ordered amount, and as a
/// withdrawal request the amount to take out of stock. It is never a stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleProduct {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub quantity: u32,
}

impl SimpleProduct {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
