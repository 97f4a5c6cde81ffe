//! # User Store
//!
//! Account records keyed by [`UserId`], plus the credential check used by login.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`credentials`] - [`CredentialHasher`], Argon2id hashing for stored passwords
//!
//! ## Credentials
//!
//! Passwords are never stored in the clear. [`UserStore::register`] hashes the plaintext
//! with a fresh salt and [`UserStore::check_login`] verifies against the stored hash.
//! A miss on the username still pays for one verification, and both "no such user" and
//! "wrong password" come back as the same [`UserError::NotFound`].

pub mod credentials;
pub mod entity;
pub mod error;

pub use credentials::*;
pub use error::*;

use crate::framework::ResourceStore;
use crate::model::{User, UserCreate, UserId};
use tracing::{debug, info, warn};

/// Store of user accounts.
pub struct UserStore {
    inner: ResourceStore<User>,
    hasher: CredentialHasher,
}

impl UserStore {
    pub fn new(hasher: CredentialHasher) -> Self {
        Self {
            inner: ResourceStore::new(),
            hasher,
        }
    }

    /// Inserts or overwrites the record at `user.id`.
    pub fn add(&self, user: User) {
        self.inner.insert(user);
    }

    /// Hashes `params.password` and stores the resulting user.
    pub fn register(&self, params: UserCreate) -> Result<User, UserError> {
        debug!(?params, "Register");
        let password_hash = self.hasher.hash(&params.password)?;
        let user = User {
            id: params.id,
            name: params.name,
            email: params.email,
            username: params.username,
            password_hash,
            role: params.role,
        };
        self.add(user.clone());
        Ok(user)
    }

    pub fn find(&self, id: &UserId) -> Result<User, UserError> {
        self.inner
            .get(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Returns every user, in no particular order.
    pub fn find_all(&self) -> Vec<User> {
        self.inner.snapshot()
    }

    /// Returns the first user whose username and password both match.
    ///
    /// The username scan runs under the read lock. Hash verification runs after the lock
    /// is released, so a slow Argon2 check never holds up writers.
    pub fn check_login(&self, username: &str, password: &str) -> Result<User, UserError> {
        let candidates: Vec<User> = self.inner.read(|users| {
            users
                .values()
                .filter(|user| user.username == username)
                .cloned()
                .collect()
        });

        let found = if candidates.is_empty() {
            self.hasher.verify_dummy(password);
            None
        } else {
            candidates
                .into_iter()
                .find(|user| self.hasher.verify(password, &user.password_hash))
        };

        match found {
            Some(user) => {
                info!(user_id = %user.id, role = %user.role, "Login ok");
                Ok(user)
            }
            None => {
                warn!(username, "Login failed");
                Err(UserError::NotFound(username.to_string()))
            }
        }
    }
}
