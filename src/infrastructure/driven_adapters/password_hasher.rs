//! Argon2 Password Hasher
//!
//! Hashes run on tokio's blocking pool since they are deliberately slow.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use zeroize::Zeroizing;

use super::config::PasswordConfig;
use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::CredentialError;

/// Argon2id implementation of PasswordHasher
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Build a hasher from configured cost parameters
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Hashing` if the parameters are out of range.
    pub fn new(config: &PasswordConfig) -> Result<Self, CredentialError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;
        Ok(Self { params })
    }

    /// A hasher with the cheapest valid parameters, for tests only
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            params: Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
                .unwrap_or_default(),
        }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let argon2 = self.argon2();
        let password = Zeroizing::new(password.to_string());

        tokio::task::spawn_blocking(move || {
            use argon2::PasswordHasher as _;

            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| CredentialError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        // Parameters come from the stored hash, not from our config.
        let argon2 = Argon2::default();
        let password = Zeroizing::new(password.to_string());
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            use argon2::PasswordVerifier as _;

            let parsed = PasswordHash::new(&hash)
                .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(CredentialError::Hashing(e.to_string())),
            }
        })
        .await
        .map_err(|e| CredentialError::Hashing(e.to_string()))?
    }
}
