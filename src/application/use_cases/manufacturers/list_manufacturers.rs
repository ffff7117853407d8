//! List Manufacturers Use Case
//!
//! Retrieves manufacturers, optionally filtered by name.

use std::sync::Arc;

use crate::domain::gateways::ManufacturerRepository;
use crate::domain::models::manufacturer::Manufacturer;
use crate::domain::models::SearchFilter;
use crate::shared::errors::UseCaseError;

/// Use case for listing manufacturers
pub struct ListManufacturersUseCase {
    manufacturer_repository: Arc<dyn ManufacturerRepository>,
}

impl ListManufacturersUseCase {
    /// Create a new ListManufacturersUseCase
    #[must_use]
    pub fn new(manufacturer_repository: Arc<dyn ManufacturerRepository>) -> Self {
        Self {
            manufacturer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: &SearchFilter) -> Result<Vec<Manufacturer>, UseCaseError> {
        tracing::debug!(name = ?filter.term(), "Listing manufacturers");

        let manufacturers = self.manufacturer_repository.search(filter).await?;

        tracing::debug!(count = manufacturers.len(), "Found manufacturers");
        Ok(manufacturers)
    }
}
