//! Manufacturer Use Cases

mod list_manufacturers;

pub use list_manufacturers::ListManufacturersUseCase;
