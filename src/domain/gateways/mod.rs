//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod catalog_repository;
pub mod validation;

pub use catalog_repository::CatalogRepository;
pub use validation::{ExistenceCheckSpec, Validation};
