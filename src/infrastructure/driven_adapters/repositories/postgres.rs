//! PostgreSQL Repository Implementations
//!
//! Implements the repository traits using SQLx for PostgreSQL.
//! Search uses `ILIKE` with the term's wildcards escaped. Lists sort under the
//! `"C"` collation so the order is bytewise, matching the in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::{CarRepository, DriverRepository, ManufacturerRepository};
use crate::domain::models::car::Car;
use crate::domain::models::driver::Driver;
use crate::domain::models::manufacturer::Manufacturer;
use crate::domain::models::{CarId, DriverId, ManufacturerId, SearchFilter};
use crate::shared::errors::RepositoryError;

/// Escape `%`, `_` and `\` so the term is matched literally by `LIKE ... ESCAPE '\'`
fn like_term(filter: &SearchFilter) -> Option<String> {
    filter.term().map(|term| {
        let mut escaped = String::with_capacity(term.len());
        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    })
}

fn count_from_row(count: i64) -> Result<u64, RepositoryError> {
    u64::try_from(count).map_err(|e| RepositoryError::Mapping(format!("Invalid row count: {e}")))
}

/// Translate constraint violations into repository errors the use cases understand
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.code().as_deref() {
            Some("23505") => {
                let field = match db_err.constraint() {
                    Some("drivers_username_key") => "username",
                    Some("drivers_license_number_key") => "license_number",
                    Some(other) => other,
                    None => "unknown",
                };
                return RepositoryError::UniqueViolation(field.to_string());
            }
            Some("23503") => {
                return RepositoryError::NotFound(format!(
                    "referenced row missing ({})",
                    db_err.constraint().unwrap_or("foreign key")
                ));
            }
            _ => {}
        }
    }
    RepositoryError::Database(err)
}

// ---------------------------------------------------------------------------
// Manufacturers
// ---------------------------------------------------------------------------

/// Database row representation for the manufacturers table
#[derive(Debug, sqlx::FromRow)]
struct ManufacturerRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<ManufacturerRow> for Manufacturer {
    fn from(row: ManufacturerRow) -> Self {
        Manufacturer::restore(ManufacturerId::from_uuid(row.id), row.name, row.created_at)
    }
}

/// PostgreSQL implementation of ManufacturerRepository
pub struct PostgresManufacturerRepository {
    pool: PgPool,
}

impl PostgresManufacturerRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManufacturerRepository for PostgresManufacturerRepository {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Manufacturer>, RepositoryError> {
        let rows = sqlx::query_as::<_, ManufacturerRow>(
            r#"
            SELECT id, name, created_at
            FROM manufacturers
            WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY name COLLATE "C" ASC, id ASC
            "#,
        )
        .bind(like_term(filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Manufacturer::from).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM manufacturers")
            .fetch_one(&self.pool)
            .await?;

        count_from_row(count)
    }

    async fn create(&self, manufacturer: &Manufacturer) -> Result<Manufacturer, RepositoryError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            r"
            INSERT INTO manufacturers (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at
            ",
        )
        .bind(manufacturer.id().as_uuid())
        .bind(manufacturer.name())
        .bind(manufacturer.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(Manufacturer::from(row))
    }
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// Database row representation for the drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: Uuid,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    license_number: String,
    created_at: DateTime<Utc>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(
            DriverId::from_uuid(row.id),
            row.username,
            row.password_hash,
            row.first_name,
            row.last_name,
            row.license_number,
            row.created_at,
        )
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r"
            SELECT id, username, password_hash, first_name, last_name,
                   license_number, created_at
            FROM drivers
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r"
            SELECT id, username, password_hash, first_name, last_name,
                   license_number, created_at
            FROM drivers
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, username, password_hash, first_name, last_name,
                   license_number, created_at
            FROM drivers
            WHERE $1::TEXT IS NULL OR username ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY username COLLATE "C" ASC, id ASC
            "#,
        )
        .bind(like_term(filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        count_from_row(count)
    }

    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r"
            INSERT INTO drivers (
                id, username, password_hash, first_name, last_name,
                license_number, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, username, password_hash, first_name, last_name,
                      license_number, created_at
            ",
        )
        .bind(driver.id().as_uuid())
        .bind(driver.username())
        .bind(driver.password_hash())
        .bind(driver.first_name())
        .bind(driver.last_name())
        .bind(driver.license_number())
        .bind(driver.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(Driver::from(row))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_license_number(&self, license_number: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE license_number = $1)",
        )
        .bind(license_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ---------------------------------------------------------------------------
// Cars
// ---------------------------------------------------------------------------

/// Car row joined with its manufacturer
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    model: String,
    created_at: DateTime<Utc>,
    manufacturer_id: Uuid,
    manufacturer_name: String,
    manufacturer_created_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        let manufacturer = Manufacturer::restore(
            ManufacturerId::from_uuid(row.manufacturer_id),
            row.manufacturer_name,
            row.manufacturer_created_at,
        );
        Car::restore(CarId::from_uuid(row.id), row.model, manufacturer, row.created_at)
    }
}

/// PostgreSQL implementation of CarRepository
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Car>, RepositoryError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT c.id, c.model, c.created_at,
                   m.id AS manufacturer_id,
                   m.name AS manufacturer_name,
                   m.created_at AS manufacturer_created_at
            FROM cars c
            JOIN manufacturers m ON m.id = c.manufacturer_id
            WHERE $1::TEXT IS NULL OR c.model ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY c.model COLLATE "C" ASC, c.id ASC
            "#,
        )
        .bind(like_term(filter))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        count_from_row(count)
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r"
            WITH inserted AS (
                INSERT INTO cars (id, model, manufacturer_id, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id, model, manufacturer_id, created_at
            )
            SELECT i.id, i.model, i.created_at,
                   m.id AS manufacturer_id,
                   m.name AS manufacturer_name,
                   m.created_at AS manufacturer_created_at
            FROM inserted i
            JOIN manufacturers m ON m.id = i.manufacturer_id
            ",
        )
        .bind(car.id().as_uuid())
        .bind(car.model())
        .bind(car.manufacturer().id().as_uuid())
        .bind(car.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(Car::from(row))
    }
}
