//! Salted password hashing for stored accounts.

use super::UserError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Hashes and verifies passwords with Argon2id.
///
/// Hashes are PHC strings carrying their own salt and parameters, so records hashed
/// under older parameters keep verifying after the cost settings change.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    /// Verified against when no username matches, so misses and wrong passwords cost the same.
    dummy_hash: String,
}

impl CredentialHasher {
    pub fn new(params: Params) -> Result<Self, UserError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = hash_with(&argon2, "no-such-user")?;
        Ok(Self { argon2, dummy_hash })
    }

    /// Hashes `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, UserError> {
        hash_with(&self.argon2, password)
    }

    /// Returns whether `password` matches `hash`. A malformed hash never matches.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Spends one verification on the dummy hash and discards the result.
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, &self.dummy_hash);
    }
}

fn hash_with(argon2: &Argon2<'static>, password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> CredentialHasher {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
        CredentialHasher::new(params).unwrap()
    }

    #[test]
    fn test_hash_verifies_only_the_original_password() {
        let hasher = hasher();
        let hash = hasher.hash("rey123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("rey123"));
        assert!(hasher.verify("rey123", &hash));
        assert!(!hasher.verify("rey124", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = hasher();
        assert_ne!(hasher.hash("kylo123").unwrap(), hasher.hash("kylo123").unwrap());
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let hasher = hasher();
        assert!(!hasher.verify("luke123", "luke123"));
        assert!(!hasher.verify("", ""));
    }
}
