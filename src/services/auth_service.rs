use crate::model::User;
use crate::user_store::{UserError, UserStore};
use std::sync::Arc;
use tracing::instrument;

/// Validating façade over [`UserStore::check_login`].
///
/// Token issuance lives outside this crate; callers turn the returned [`User`] into
/// whatever credential they hand out.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<User, UserError> {
        if username.is_empty() || password.is_empty() {
            return Err(UserError::InvalidArgument(
                "username and password are required".to_string(),
            ));
        }
        self.users.check_login(username, password)
    }
}
