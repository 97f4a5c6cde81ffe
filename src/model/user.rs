use serde::{Deserialize, Serialize};
use std::fmt::Display;

string_id!(
    /// Type-safe identifier for Users.
    UserId
);

/// Access level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Nobody,
    Standard,
    Admin,
    Service,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Nobody => "Nobody",
            Role::Standard => "Standard",
            Role::Admin => "Admin",
            Role::Service => "Service",
        };
        f.write_str(name)
    }
}

/// Represents a registered user in the system.
///
/// The password is only ever held as a salted Argon2 hash in PHC string format. It is
/// never serialized, so handing a `User` to a transport layer cannot leak it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Creates a new User instance without credentials.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - User's display name
    /// * `email` - User's email address
    /// * `username` - Login name checked by [`crate::user_store::UserStore::check_login`]
    /// * `role` - Access level
    ///
    /// # Notes
    /// `password_hash` starts empty; such a user can never log in. Use
    /// [`crate::user_store::UserStore::register`] to store a user with a password.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            username: username.into(),
            password_hash: String::new(),
            role,
        }
    }
}

/// Payload for registering a user from a plaintext password.
#[derive(Clone, Deserialize)]
pub struct UserCreate {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

// Hand-written so the plaintext password never reaches a log line.
impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
