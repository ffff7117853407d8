//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod car;
pub mod driver;
pub mod ids;
pub mod manufacturer;
pub mod password_policy;
pub mod search;

pub use car::{Car, CreateCarData};
pub use driver::{CreateDriverData, Driver};
pub use ids::{CarId, DriverId, ManufacturerId};
pub use manufacturer::{CreateManufacturerData, Manufacturer};
pub use password_policy::PasswordPolicy;
pub use search::SearchFilter;
