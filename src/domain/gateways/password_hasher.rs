//! Password Hasher Gateway
//!
//! Credential hashing is delegated to an adapter so the algorithm and its
//! cost parameters stay out of the domain.

use async_trait::async_trait;

use crate::shared::errors::CredentialError;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing hash string
    async fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError>;
}
