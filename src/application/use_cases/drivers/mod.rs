//! Driver Use Cases
//!
//! Listing, registration and login of driver accounts.

mod authenticate_driver;
mod create_driver;
mod get_driver_by_id;
mod list_drivers;

pub use authenticate_driver::AuthenticateDriverUseCase;
pub use create_driver::{CreateDriverUseCase, RegisterDriverData};
pub use get_driver_by_id::GetDriverByIdUseCase;
pub use list_drivers::ListDriversUseCase;
