//! Car Domain Model
//!
//! A car always belongs to exactly one manufacturer.

use chrono::{DateTime, Utc};

use super::ids::{CarId, ManufacturerId};
use super::manufacturer::Manufacturer;
use crate::shared::errors::DomainError;

/// Data required to create a new Car
#[derive(Debug, Clone)]
pub struct CreateCarData {
    pub model: String,
    pub manufacturer_id: ManufacturerId,
}

/// Car domain entity, carrying its resolved manufacturer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    model: String,
    manufacturer: Manufacturer,
    created_at: DateTime<Utc>,
}

impl Car {
    /// Create a new Car for an existing manufacturer
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the model is blank or the
    /// manufacturer does not match `data.manufacturer_id`.
    pub fn new(data: CreateCarData, manufacturer: Manufacturer) -> Result<Self, DomainError> {
        if data.model.trim().is_empty() {
            return Err(DomainError::InvalidState("car model must not be empty".to_string()));
        }
        if manufacturer.id() != &data.manufacturer_id {
            return Err(DomainError::InvalidState(format!(
                "manufacturer {} does not match requested {}",
                manufacturer.id(),
                data.manufacturer_id
            )));
        }

        Ok(Self {
            id: CarId::new(),
            model: data.model,
            manufacturer,
            created_at: Utc::now(),
        })
    }

    /// Restore a Car from persisted data
    #[must_use]
    pub fn restore(
        id: CarId,
        model: String,
        manufacturer: Manufacturer,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            model,
            manufacturer,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CarId {
        &self.id
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn manufacturer(&self) -> &Manufacturer {
        &self.manufacturer
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::manufacturer::CreateManufacturerData;

    fn manufacturer() -> Manufacturer {
        Manufacturer::new(CreateManufacturerData {
            name: "Test Manufacturer 01".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn car_keeps_its_manufacturer() {
        let manufacturer = manufacturer();
        let car = Car::new(
            CreateCarData {
                model: "Test Car 01".to_string(),
                manufacturer_id: *manufacturer.id(),
            },
            manufacturer.clone(),
        )
        .unwrap();

        assert_eq!(car.model(), "Test Car 01");
        assert_eq!(car.manufacturer(), &manufacturer);
    }

    #[test]
    fn mismatched_manufacturer_is_rejected() {
        let result = Car::new(
            CreateCarData {
                model: "Test Car 01".to_string(),
                manufacturer_id: ManufacturerId::new(),
            },
            manufacturer(),
        );
        assert!(matches!(result, Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn blank_model_is_rejected() {
        let manufacturer = manufacturer();
        let result = Car::new(
            CreateCarData {
                model: String::new(),
                manufacturer_id: *manufacturer.id(),
            },
            manufacturer,
        );
        assert!(result.is_err());
    }
}
