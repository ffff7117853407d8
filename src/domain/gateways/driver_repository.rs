//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver (user account) persistence.

use async_trait::async_trait;

use crate::domain::models::driver::Driver;
use crate::domain::models::{DriverId, SearchFilter};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find a driver by its ID
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Find a driver by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError>;

    /// Find drivers whose username contains the filter term, sorted by username
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Driver>, RepositoryError>;

    /// Count all drivers
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Create a new driver.
    ///
    /// Fails with `RepositoryError::UniqueViolation` naming the offending
    /// field when the username or license number is already taken.
    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Check if a username is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Check if a license number is already registered
    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, RepositoryError>;
}
