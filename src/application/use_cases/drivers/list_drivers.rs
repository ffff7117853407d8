//! List Drivers Use Case
//!
//! Retrieves drivers, optionally filtered by username.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::domain::models::SearchFilter;
use crate::shared::errors::UseCaseError;

/// Use case for listing drivers
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListDriversUseCase {
    /// Create a new ListDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: &SearchFilter) -> Result<Vec<Driver>, UseCaseError> {
        tracing::debug!(username = ?filter.term(), "Listing drivers");

        let drivers = self.driver_repository.search(filter).await?;

        tracing::debug!(count = drivers.len(), "Found drivers");
        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::driver::CreateDriverData;
    use crate::infrastructure::driven_adapters::repositories::InMemoryStore;

    fn create_test_driver(username: &str, license_number: &str) -> Driver {
        Driver::new(CreateDriverData {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            license_number: license_number.to_string(),
        })
        .expect("valid test data")
    }

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        for (username, license) in [
            ("test_01", "TES11111"),
            ("test_02", "TES22222"),
            ("somebody", "SOM12345"),
        ] {
            DriverRepository::create(store.as_ref(), &create_test_driver(username, license))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn should_filter_by_username_substring() {
        let use_case = ListDriversUseCase::new(seeded_store().await);

        let result = use_case.execute(&SearchFilter::from("test")).await.unwrap();
        let usernames: Vec<&str> = result.iter().map(Driver::username).collect();

        assert_eq!(usernames, vec!["test_01", "test_02"]);
    }

    #[tokio::test]
    async fn should_return_everyone_for_empty_filter() {
        let use_case = ListDriversUseCase::new(seeded_store().await);

        let result = use_case.execute(&SearchFilter::from("")).await.unwrap();
        let usernames: Vec<&str> = result.iter().map(Driver::username).collect();

        assert_eq!(usernames, vec!["somebody", "test_01", "test_02"]);
    }

    #[tokio::test]
    async fn should_return_nothing_for_unknown_username() {
        let use_case = ListDriversUseCase::new(seeded_store().await);

        let result = use_case.execute(&SearchFilter::from("noname")).await.unwrap();

        assert!(result.is_empty());
    }
}
