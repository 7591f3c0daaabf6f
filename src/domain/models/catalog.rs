//! Catalog Entity Contract
//!
//! What the generic CRUD use case needs to know about an entity: where it
//! lives, which values must be unique, which rows it points at, and which
//! templates describe its failures.

use crate::domain::models::record::{FieldValue, FilterClause, RecordId};
use crate::shared::errors::ErrorTemplate;

/// A value that must not be taken by another record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueField {
    pub column: &'static str,
    pub value: FieldValue,
    pub already_exists: ErrorTemplate,
}

/// A foreign record that must exist and not be soft-deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCheck {
    pub table: &'static str,
    pub id_column: &'static str,
    /// Soft-delete column of the referenced table
    pub status_column: &'static str,
    pub id: RecordId,
    pub not_found: ErrorTemplate,
}

impl ReferenceCheck {
    /// Reference to the `R` record `id`, reported as `not_found` when absent
    #[must_use]
    pub fn to<R: CatalogEntity>(id: RecordId, not_found: ErrorTemplate) -> Self {
        Self {
            table: R::TABLE,
            id_column: R::ID_COLUMN,
            status_column: R::STATUS_COLUMN,
            id,
            not_found,
        }
    }
}

/// A soft-deletable catalog entity managed through `CrudUseCase`
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Body accepted by create and (full) update
    type Data: Clone + Send + Sync + 'static;
    type Filters: Clone + Default + Send + Sync + 'static;

    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    /// Nullable soft-delete timestamp
    const STATUS_COLUMN: &'static str = "deleted_at";
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    const NOT_FOUND: ErrorTemplate;
    const ID_HAS_BEEN_DELETED: ErrorTemplate;

    fn id(&self) -> &RecordId;

    fn unique_fields(data: &Self::Data) -> Vec<UniqueField>;

    fn references(_data: &Self::Data) -> Vec<ReferenceCheck> {
        Vec::new()
    }

    fn filter_clauses(filters: &Self::Filters) -> Vec<FilterClause>;
}
