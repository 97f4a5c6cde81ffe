//! Entity trait implementation for the User domain type.

use crate::framework::Entity;
use crate::model::{User, UserId};

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}
