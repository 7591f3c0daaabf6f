//! Domain Layer
//!
//! Contains the catalog entities, their known failure modes, and the gateway
//! traits (ports) the use cases depend on.
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{CatalogRepository, ExistenceCheckSpec, Validation};
pub use models::{CatalogEntity, FieldValue, FilterClause, RecordId};
