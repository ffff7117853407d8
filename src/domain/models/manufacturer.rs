//! Manufacturer Domain Model
//!
//! A car manufacturer. Read-only from the web surface.

use chrono::{DateTime, Utc};

use super::ids::ManufacturerId;
use crate::shared::errors::DomainError;

/// Data required to create a new Manufacturer
#[derive(Debug, Clone)]
pub struct CreateManufacturerData {
    pub name: String,
}

/// Manufacturer domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    id: ManufacturerId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Manufacturer {
    /// Create a new Manufacturer from creation data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the name is blank.
    pub fn new(data: CreateManufacturerData) -> Result<Self, DomainError> {
        if data.name.trim().is_empty() {
            return Err(DomainError::InvalidState(
                "manufacturer name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: ManufacturerId::new(),
            name: data.name,
            created_at: Utc::now(),
        })
    }

    /// Restore a Manufacturer from persisted data
    #[must_use]
    pub fn restore(id: ManufacturerId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ManufacturerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manufacturer_keeps_name() {
        let manufacturer = Manufacturer::new(CreateManufacturerData {
            name: "Test Manufacturer 01".to_string(),
        })
        .unwrap();

        assert_eq!(manufacturer.name(), "Test Manufacturer 01");
        assert_eq!(manufacturer.to_string(), "Test Manufacturer 01");
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = Manufacturer::new(CreateManufacturerData {
            name: "   ".to_string(),
        });
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }
}
