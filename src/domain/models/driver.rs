//! Driver Domain Model
//!
//! A driver is the user account of the fleet application: it logs in and
//! carries a license number.

use chrono::{DateTime, Utc};

use super::ids::DriverId;
use crate::shared::errors::DomainError;

/// Data required to persist a new Driver.
///
/// The password is already hashed at this point.
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    license_number: String,
    created_at: DateTime<Utc>,
}

impl Driver {
    /// Create a new Driver from creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the username, password hash or
    /// license number is empty.
    pub fn new(data: CreateDriverData) -> Result<Self, DomainError> {
        if data.username.is_empty() {
            return Err(DomainError::InvalidState("username must not be empty".to_string()));
        }
        if data.password_hash.is_empty() {
            return Err(DomainError::InvalidState("password hash must not be empty".to_string()));
        }
        if data.license_number.is_empty() {
            return Err(DomainError::InvalidState(
                "license number must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: DriverId::new(),
            username: data.username,
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            license_number: data.license_number,
            created_at: Utc::now(),
        })
    }

    /// Restore a Driver from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: DriverId,
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        license_number: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            first_name,
            last_name,
            license_number,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &DriverId {
        &self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined, empty when neither is set
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    #[must_use]
    pub fn license_number(&self) -> &str {
        &self.license_number
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)
    }
}
