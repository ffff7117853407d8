//! Fleet Summary Use Case
//!
//! Counts the records shown on the home page.

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::shared::errors::UseCaseError;

/// Record counts across the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetSummary {
    pub manufacturers: u64,
    pub drivers: u64,
    pub cars: u64,
}

/// Use case for summarising the fleet
pub struct FleetSummaryUseCase {
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
    driver_repository: Arc<dyn DriverRepository>,
    car_repository: Arc<dyn CarRepository>,
}

impl FleetSummaryUseCase {
    #[must_use]
    pub fn new(
        manufacturer_repository: Arc<dyn ManufacturerRepository>,
        driver_repository: Arc<dyn DriverRepository>,
        car_repository: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            manufacturer_repository,
            driver_repository,
            car_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if any count fails.
    pub async fn execute(&self) -> Result<FleetSummary, UseCaseError> {
        let (manufacturers, drivers, cars) = tokio::try_join!(
            self.manufacturer_repository.count(),
            self.driver_repository.count(),
            self.car_repository.count(),
        )?;

        Ok(FleetSummary {
            manufacturers,
            drivers,
            cars,
        })
    }
}
