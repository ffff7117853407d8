//! Repository Adapters
//!
//! PostgreSQL repositories for production and an in-memory store for tests
//! and database-less runs.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryStore;
pub use postgres::{PostgresCarRepository, PostgresDriverRepository, PostgresManufacturerRepository};
