use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

use crate::error::{UserError, UserResult};

/// One-way password hashing seam.
///
/// `hash` must be salted, so equal inputs may produce different outputs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> UserResult<String>;

    /// `Ok(false)` on mismatch; `Err` only if `hash` is not a valid PHC string.
    async fn verify(&self, password: &str, hash: &str) -> UserResult<bool>;
}

/// Argon2id with default parameters, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, password: &str) -> UserResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| UserError::PasswordHash(e.to_string()))
        })
        .await
        .map_err(|e| UserError::Internal(format!("Hashing task failed: {}", e)))?
    }

    async fn verify(&self, password: &str, hash: &str) -> UserResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed =
                PasswordHash::new(&hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| UserError::Internal(format!("Verification task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_is_salted_and_verifies() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash("abc123").await.unwrap();
        let second = hasher.hash("abc123").await.unwrap();

        assert_ne!(first, "abc123");
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(hasher.verify("abc123", &first).await.unwrap());
        assert!(!hasher.verify("abc124", &first).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        let result = Argon2Hasher::new().verify("abc123", "not-a-hash").await;
        assert!(matches!(result, Err(UserError::PasswordHash(_))));
    }
}
