//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories and existence queries
//! - Configuration

pub mod catalog_repository;
pub mod config;
pub mod database;
pub mod validation;

pub use catalog_repository::{PgCatalogEntity, PostgresCatalogRepository};
pub use config::AppConfig;
pub use validation::PostgresValidation;
