//! Car Repository Gateway
//!
//! Abstract trait defining the contract for car persistence.

use async_trait::async_trait;

use crate::domain::models::car::Car;
use crate::domain::models::SearchFilter;
use crate::shared::errors::RepositoryError;

/// Repository trait for Car persistence operations
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find cars whose model contains the filter term, sorted by model.
    /// Every returned car carries its manufacturer.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Car>, RepositoryError>;

    /// Count all cars
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Create a new car.
    ///
    /// Fails with `RepositoryError::NotFound` when the manufacturer does not exist.
    async fn create(&self, car: &Car) -> Result<Car, RepositoryError>;
}
