use crate::model::{Product, SimpleProduct};
use crate::product_store::{ProductError, ProductStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Validating façade over the [`ProductStore`].
#[derive(Clone)]
pub struct StockService {
    products: Arc<ProductStore>,
}

impl StockService {
    pub fn new(products: Arc<ProductStore>) -> Self {
        Self { products }
    }

    /// Returns every stock item with its current quantity.
    #[instrument(skip(self))]
    pub fn get_items(&self) -> Vec<Product> {
        let items = self.products.find_all();
        debug!(count = items.len(), "Items listed");
        items
    }

    /// Restocks or creates an item. A zero quantity only refreshes name and description.
    #[instrument(skip(self, product), fields(product_id = %product.id, quantity = product.quantity))]
    pub fn add(&self, product: Product) -> Result<Product, ProductError> {
        if product.id.is_empty() {
            return Err(ProductError::InvalidArgument("product id is empty".to_string()));
        }
        self.products.add(product)
    }

    #[instrument(skip(self, request), fields(product_id = %request.product_id, quantity = request.quantity))]
    pub fn withdraw(&self, request: SimpleProduct) -> Result<Product, ProductError> {
        if request.product_id.is_empty() {
            return Err(ProductError::InvalidArgument("product id is empty".to_string()));
        }
        if request.quantity == 0 {
            return Err(ProductError::InvalidArgument("quantity must be positive".to_string()));
        }
        self.products.withdraw(&request)
    }
}
