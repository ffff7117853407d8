//! Manufacturer Repository Gateway
//!
//! Abstract trait defining the contract for manufacturer persistence.

use async_trait::async_trait;

use crate::domain::models::manufacturer::Manufacturer;
use crate::domain::models::SearchFilter;
use crate::shared::errors::RepositoryError;

/// Repository trait for Manufacturer persistence operations
#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    /// Find manufacturers whose name contains the filter term, sorted by name
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Manufacturer>, RepositoryError>;

    /// Count all manufacturers
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Create a new manufacturer
    async fn create(&self, manufacturer: &Manufacturer) -> Result<Manufacturer, RepositoryError>;
}
