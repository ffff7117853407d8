//! List Cars Use Case
//!
//! Retrieves cars with their manufacturers, optionally filtered by model.

use std::sync::Arc;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::Car;
use crate::domain::models::SearchFilter;
use crate::shared::errors::UseCaseError;

/// Use case for listing cars
pub struct ListCarsUseCase {
    car_repository: Arc<dyn CarRepository>,
}

impl ListCarsUseCase {
    /// Create a new ListCarsUseCase
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: &SearchFilter) -> Result<Vec<Car>, UseCaseError> {
        tracing::debug!(model = ?filter.term(), "Listing cars");

        let cars = self.car_repository.search(filter).await?;

        tracing::debug!(count = cars.len(), "Found cars");
        Ok(cars)
    }
}
