//! Entity trait implementation for the Cart domain type.
//!
//! A cart is keyed by its owner, so there is exactly one cart per user.

use crate::framework::Entity;
use crate::model::{Cart, UserId};

impl Entity for Cart {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.user_id
    }
}
