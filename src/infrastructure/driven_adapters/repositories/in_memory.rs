//! In-Memory Repository Implementation
//!
//! A single store backing all three repositories, used by the router tests.
//! It keeps the same ordering and uniqueness rules as the PostgreSQL tables.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::domain::models::car::Car;
use crate::domain::models::driver::Driver;
use crate::domain::models::manufacturer::Manufacturer;
use crate::domain::models::{DriverId, SearchFilter};
use crate::shared::errors::RepositoryError;

#[derive(Default)]
struct Tables {
    manufacturers: Vec<Manufacturer>,
    drivers: Vec<Driver>,
    cars: Vec<Car>,
}

/// In-memory implementation of every repository trait
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn len_as_u64(len: usize) -> Result<u64, RepositoryError> {
    u64::try_from(len).map_err(|e| RepositoryError::Mapping(format!("Invalid row count: {e}")))
}

#[async_trait]
impl ManufacturerRepository for InMemoryStore {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Manufacturer>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut found: Vec<Manufacturer> = tables
            .manufacturers
            .iter()
            .filter(|m| filter.matches(m.name()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(found)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        len_as_u64(self.tables.read().await.manufacturers.len())
    }

    async fn create(&self, manufacturer: &Manufacturer) -> Result<Manufacturer, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.manufacturers.iter().any(|m| m.id() == manufacturer.id()) {
            return Err(RepositoryError::UniqueViolation("id".to_string()));
        }
        tables.manufacturers.push(manufacturer.clone());
        Ok(manufacturer.clone())
    }
}

#[async_trait]
impl DriverRepository for InMemoryStore {
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.drivers.iter().find(|d| d.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.drivers.iter().find(|d| d.username() == username).cloned())
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Driver>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut found: Vec<Driver> = tables
            .drivers
            .iter()
            .filter(|d| filter.matches(d.username()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.username().cmp(b.username()).then_with(|| a.id().cmp(b.id())));
        Ok(found)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        len_as_u64(self.tables.read().await.drivers.len())
    }

    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        // Checked and inserted under one write lock, like a unique index.
        let mut tables = self.tables.write().await;
        if tables.drivers.iter().any(|d| d.username() == driver.username()) {
            return Err(RepositoryError::UniqueViolation("username".to_string()));
        }
        if tables
            .drivers
            .iter()
            .any(|d| d.license_number() == driver.license_number())
        {
            return Err(RepositoryError::UniqueViolation("license_number".to_string()));
        }
        tables.drivers.push(driver.clone());
        Ok(driver.clone())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.drivers.iter().any(|d| d.username() == username))
    }

    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.drivers.iter().any(|d| d.license_number() == license_number))
    }
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Car>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut found: Vec<Car> = tables
            .cars
            .iter()
            .filter(|c| filter.matches(c.model()))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.model().cmp(b.model()).then_with(|| a.id().cmp(b.id())));
        Ok(found)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        len_as_u64(self.tables.read().await.cars.len())
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        let mut tables = self.tables.write().await;
        let manufacturer = tables
            .manufacturers
            .iter()
            .find(|m| m.id() == car.manufacturer().id())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("manufacturer {}", car.manufacturer().id()))
            })?;

        // Store the manufacturer as persisted, not as the caller passed it.
        let stored = Car::restore(*car.id(), car.model().to_string(), manufacturer, car.created_at());
        tables.cars.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::car::CreateCarData;
    use crate::domain::models::manufacturer::CreateManufacturerData;

    fn manufacturer(name: &str) -> Manufacturer {
        Manufacturer::new(CreateManufacturerData {
            name: name.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn manufacturers_are_sorted_by_name() {
        let store = InMemoryStore::new();
        for name in ["Test Manufacturer 02", "Another Manufacturer", "Test Manufacturer 01"] {
            ManufacturerRepository::create(&store, &manufacturer(name)).await.unwrap();
        }

        let names: Vec<String> = ManufacturerRepository::search(&store, &SearchFilter::all())
            .await
            .unwrap()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(
            names,
            vec!["Another Manufacturer", "Test Manufacturer 01", "Test Manufacturer 02"]
        );
    }

    #[tokio::test]
    async fn car_for_unknown_manufacturer_is_rejected() {
        let store = InMemoryStore::new();
        let orphan_owner = manufacturer("Never Stored");
        let car = Car::new(
            CreateCarData {
                model: "Ghost".to_string(),
                manufacturer_id: *orphan_owner.id(),
            },
            orphan_owner,
        )
        .unwrap();

        let result = CarRepository::create(&store, &car).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert_eq!(CarRepository::count(&store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_unique_violation() {
        let store = InMemoryStore::new();
        let make = |license: &str| {
            Driver::new(crate::domain::models::driver::CreateDriverData {
                username: "test".to_string(),
                password_hash: "hash".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                license_number: license.to_string(),
            })
            .unwrap()
        };
        DriverRepository::create(&store, &make("TES11111")).await.unwrap();

        let result = DriverRepository::create(&store, &make("TES22222")).await;

        assert!(matches!(result, Err(RepositoryError::UniqueViolation(field)) if field == "username"));
    }
}
