//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories (PostgreSQL and in-memory)
//! - Password hashing
//! - Page rendering
//! - Configuration

pub mod config;
pub mod database;
pub mod password_hasher;
pub mod renderer;
pub mod repositories;

pub use config::AppConfig;
pub use password_hasher::Argon2PasswordHasher;
pub use renderer::MiniJinjaRenderer;
pub use repositories::{
    InMemoryStore, PostgresCarRepository, PostgresDriverRepository, PostgresManufacturerRepository,
};
