//! Authenticate Driver Use Case
//!
//! Checks a username and password pair at login.

use std::sync::Arc;

use crate::domain::gateways::{DriverRepository, PasswordHasher};
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;

const INVALID_CREDENTIALS: &str = "Please enter a correct username and password.";

/// Use case for verifying login credentials
pub struct AuthenticateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AuthenticateDriverUseCase {
    /// Create a new AuthenticateDriverUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            driver_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the username is unknown or the
    /// password does not match; both cases carry the same message.
    pub async fn execute(&self, username: &str, password: &str) -> Result<Driver, UseCaseError> {
        tracing::debug!(username = %username, "Authenticating driver");

        let Some(driver) = self.driver_repository.find_by_username(username).await? else {
            tracing::warn!(username = %username, "Login attempt for unknown username");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !self
            .password_hasher
            .verify(password, driver.password_hash())
            .await?
        {
            tracing::warn!(username = %username, "Login attempt with wrong password");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        tracing::info!(driver_id = %driver.id(), "Driver authenticated");
        Ok(driver)
    }
}
