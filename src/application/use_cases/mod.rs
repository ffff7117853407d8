//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod cars;
pub mod drivers;
pub mod fleet;
pub mod manufacturers;

pub use cars::ListCarsUseCase;
pub use drivers::{
    AuthenticateDriverUseCase, CreateDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase,
    RegisterDriverData,
};
pub use fleet::{FleetSummary, FleetSummaryUseCase};
pub use manufacturers::ListManufacturersUseCase;
