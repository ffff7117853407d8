//! Domain Layer
//!
//! Contains the core business rules, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{
    CarRepository, DriverRepository, ManufacturerRepository, PageRenderer, PageView, PasswordHasher,
};
pub use models::{Car, Driver, Manufacturer, SearchFilter};
