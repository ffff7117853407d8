//! Page View DTOs
//!
//! Serializable shapes of the domain records handed to templates.

use serde::Serialize;

use crate::domain::models::car::Car;
use crate::domain::models::driver::Driver;
use crate::domain::models::manufacturer::Manufacturer;

/// The logged-in driver, shown in the navigation bar
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserView {
    pub id: String,
    pub username: String,
    pub full_name: String,
}

impl From<&Driver> for CurrentUserView {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            username: driver.username().to_string(),
            full_name: driver.full_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerView {
    pub id: String,
    pub name: String,
}

impl From<&Manufacturer> for ManufacturerView {
    fn from(manufacturer: &Manufacturer) -> Self {
        Self {
            id: manufacturer.id().to_string(),
            name: manufacturer.name().to_string(),
        }
    }
}

/// A driver row; the password hash never leaves the domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverView {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

impl From<&Driver> for DriverView {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            username: driver.username().to_string(),
            first_name: driver.first_name().to_string(),
            last_name: driver.last_name().to_string(),
            license_number: driver.license_number().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarView {
    pub id: String,
    pub model: String,
    pub manufacturer: ManufacturerView,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id().to_string(),
            model: car.model().to_string(),
            manufacturer: ManufacturerView::from(car.manufacturer()),
        }
    }
}
