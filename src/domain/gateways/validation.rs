//! Validation Gateway
//!
//! Existence queries used to turn uniqueness and not-found rules into typed
//! errors before a repository write.

use async_trait::async_trait;

use crate::domain::models::catalog::CatalogEntity;
use crate::domain::models::record::{FieldValue, RecordId};
use crate::shared::errors::AppError;

/// Excludes one row from an existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub column: &'static str,
    pub id: RecordId,
}

/// `SELECT EXISTS(... FROM table WHERE id_column = id_value [AND live] [AND NOT excluded])`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceCheckSpec {
    pub table: &'static str,
    pub id_column: &'static str,
    pub id_value: FieldValue,
    /// Soft-delete column that must be NULL
    pub deleted_column: Option<&'static str>,
    pub exclude: Option<Exclusion>,
}

impl ExistenceCheckSpec {
    #[must_use]
    pub fn new(
        table: &'static str,
        id_column: &'static str,
        id_value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            table,
            id_column,
            id_value: id_value.into(),
            deleted_column: None,
            exclude: None,
        }
    }

    /// Check for the record `id` of entity `E`
    #[must_use]
    pub fn record<E: CatalogEntity>(id: RecordId) -> Self {
        Self::new(E::TABLE, E::ID_COLUMN, id)
    }

    /// Only count rows whose `column` is NULL
    #[must_use]
    pub fn not_deleted(mut self, column: &'static str) -> Self {
        self.deleted_column = Some(column);
        self
    }

    #[must_use]
    pub fn excluding(mut self, column: &'static str, id: RecordId) -> Self {
        self.exclude = Some(Exclusion { column, id });
        self
    }
}

/// Existence queries against the store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Validation: Send + Sync {
    /// `true` when the value is already taken
    async fn validate_existence(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError>;

    /// `true` when the row exists and, if asked, is not soft-deleted
    async fn record_exists(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Merchant;

    #[test]
    fn test_record_spec_targets_entity_table() {
        let id = RecordId::new();
        let spec = ExistenceCheckSpec::record::<Merchant>(id).not_deleted("deleted_at");

        assert_eq!(spec.table, "merchants");
        assert_eq!(spec.id_column, "id");
        assert_eq!(spec.id_value, FieldValue::from(id));
        assert_eq!(spec.deleted_column, Some("deleted_at"));
        assert!(spec.exclude.is_none());
    }

    #[test]
    fn test_uniqueness_spec_excludes_own_row() {
        let id = RecordId::new();
        let spec = ExistenceCheckSpec::new("stores", "code", "ST-1").excluding("id", id);

        assert!(spec.deleted_column.is_none());
        assert_eq!(spec.exclude, Some(Exclusion { column: "id", id }));
    }
}
