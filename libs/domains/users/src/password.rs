//! One-way password hashing.
//!
//! The only place in the codebase where passwords are hashed or compared.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, Params, PasswordHasher as _, PasswordVerifier as _,
};

use crate::error::{UserError, UserResult};

/// Argon2id password hasher with a per-call random salt.
///
/// The default parameters are the argon2 crate's recommended cost, which
/// is deliberately expensive; [`PasswordHasher::with_params`] lets
/// deployments tune the work factor.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Build a hasher with a custom cost (memory/iterations/parallelism).
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }

    /// Hash a plaintext password into a PHC-encoded string.
    pub fn hash(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// The comparison is delegated to the argon2 crate, so timing does not
    /// depend on where a mismatch occurs.
    pub fn verify(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hasher.verify("secret1", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret1").unwrap();

        assert!(!hasher.verify("secret2", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret1", &first).unwrap());
        assert!(hasher.verify("secret1", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("secret1", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_custom_params() {
        // Cheap parameters keep this test fast; verification reads the
        // cost back from the PHC string.
        let params = Params::new(8, 1, 1, None).unwrap();
        let hasher = PasswordHasher::with_params(params);

        let hash = hasher.hash("secret1").unwrap();
        assert!(hasher.verify("secret1", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }
}
