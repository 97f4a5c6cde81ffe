//! Entity trait implementation for the Order domain type.

use crate::framework::Entity;
use crate::model::{Order, OrderId};

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}
