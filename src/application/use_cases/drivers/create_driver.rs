//! Create Driver Use Case
//!
//! Registers a new driver account with a hashed password.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::domain::gateways::{DriverRepository, PasswordHasher};
use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::domain::models::PasswordPolicy;
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Data submitted to register a driver, with the plaintext password
#[derive(Clone)]
pub struct RegisterDriverData {
    pub username: String,
    pub password: Zeroizing<String>,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

impl std::fmt::Debug for RegisterDriverData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterDriverData")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("license_number", &self.license_number)
            .finish()
    }
}

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: PasswordPolicy,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            driver_repository,
            password_hasher,
            password_policy: PasswordPolicy::default(),
        }
    }

    /// Replace the default password policy
    #[must_use]
    pub fn with_password_policy(mut self, password_policy: PasswordPolicy) -> Self {
        self.password_policy = password_policy;
        self
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WeakPassword` if the password fails the policy.
    /// Returns `DomainError::UsernameTaken` / `DomainError::LicenseNumberTaken`
    /// if either is already registered.
    /// Returns `UseCaseError::Repository` or `UseCaseError::Credential` on
    /// infrastructure failures.
    pub async fn execute(&self, data: RegisterDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(username = %data.username, "Creating new driver");

        self.password_policy.check(&data.password, &data.username)?;

        if self.driver_repository.exists_by_username(&data.username).await? {
            tracing::warn!(username = %data.username, "Username already taken");
            return Err(DomainError::UsernameTaken(data.username).into());
        }

        if self
            .driver_repository
            .exists_by_license_number(&data.license_number)
            .await?
        {
            tracing::warn!(license_number = %data.license_number, "License number already taken");
            return Err(DomainError::LicenseNumberTaken(data.license_number).into());
        }

        let password_hash = self.password_hasher.hash(&data.password).await?;

        let driver = Driver::new(CreateDriverData {
            username: data.username,
            password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            license_number: data.license_number,
        })?;

        // A concurrent registration can still win the race; the store's
        // unique constraints have the final word.
        let created = self
            .driver_repository
            .create(&driver)
            .await
            .map_err(|err| match err {
                RepositoryError::UniqueViolation(field) if field == "username" => {
                    UseCaseError::from(DomainError::UsernameTaken(driver.username().to_string()))
                }
                RepositoryError::UniqueViolation(field) if field == "license_number" => {
                    UseCaseError::from(DomainError::LicenseNumberTaken(
                        driver.license_number().to_string(),
                    ))
                }
                other => UseCaseError::from(other),
            })?;

        tracing::info!(
            driver_id = %created.id(),
            username = %created.username(),
            "Driver created successfully"
        );

        Ok(created)
    }
}
