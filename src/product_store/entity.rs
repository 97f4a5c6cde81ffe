//! Entity trait implementation for the Product domain type.

use crate::framework::Entity;
use crate::model::{Product, ProductId};

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}
