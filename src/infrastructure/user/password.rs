//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password into a self-describing digest embedding salt and
    /// cost, so a future verifier needs no extra state
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a stored digest
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id password hasher with a tunable work factor
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the library's default cost parameters
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a hasher with explicit cost parameters (memory in KiB)
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, DomainError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| DomainError::internal(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Cost parameters come from the digest itself
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();
        let password = "passworD987654";

        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_not_the_plaintext() {
        let hasher = Argon2Hasher::new();
        let password = "passworD987654";

        let hash = hasher.hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(!hash.contains(password));
    }

    #[test]
    fn test_digest_is_self_describing() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("passworD987654").unwrap();

        // PHC string format: algorithm, version, cost parameters, salt
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m="));
        assert!(hash.contains("t="));
        assert!(hash.contains("p="));
    }

    #[test]
    fn test_hash_is_unique_per_salt() {
        let hasher = Argon2Hasher::new();
        let password = "passworD987654";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify(password, &hash1));
        assert!(hasher.verify(password, &hash2));
    }

    #[test]
    fn test_custom_cost_is_embedded() {
        let hasher = Argon2Hasher::with_cost(8192, 1, 1).unwrap();

        let hash = hasher.hash("passworD987654").unwrap();

        assert!(hash.contains("m=8192"));
        assert!(hasher.verify("passworD987654", &hash));
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        assert!(Argon2Hasher::with_cost(0, 0, 0).is_err());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = Argon2Hasher::new();

        assert!(!hasher.verify("password", "invalid_hash_format"));
        assert!(!hasher.verify("password", ""));
    }
}
