//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod car_repository;
pub mod driver_repository;
pub mod manufacturer_repository;
pub mod page_renderer;
pub mod password_hasher;

pub use car_repository::CarRepository;
pub use driver_repository::DriverRepository;
pub use manufacturer_repository::ManufacturerRepository;
pub use page_renderer::{PageRenderer, PageView};
pub use password_hasher::PasswordHasher;
