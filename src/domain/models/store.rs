//! Store Domain Model
//!
//! A physical or virtual point of sale. Every store belongs to a merchant and
//! is classified by a store type; both must be live when the store is written.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::catalog::{CatalogEntity, ReferenceCheck, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::domain::models::{Merchant, StoreType};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const STORE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_NOT_FOUND",
    "Store not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const STORE_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_ID_HAS_BEEN_DELETED",
    "Store has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const STORE_CODE_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_CODE_ALREADY_EXIST",
    "A store with this code already exists",
    409,
)
.with_level(ErrorLevel::Warning);

pub const STORE_MERCHANT_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_MERCHANT_NOT_FOUND",
    "The merchant for this store does not exist",
    404,
)
.with_level(ErrorLevel::Warning);

pub const STORE_STORE_TYPE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_STORE_TYPE_NOT_FOUND",
    "The store type for this store does not exist",
    404,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct StoreData {
    pub merchant_id: RecordId,
    pub store_type_id: RecordId,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StoreFilters {
    pub merchant_id: Option<Uuid>,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Store {
    pub id: RecordId,
    pub merchant_id: RecordId,
    pub store_type_id: RecordId,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for Store {
    type Data = StoreData;
    type Filters = StoreFilters;

    const TABLE: &'static str = "stores";
    const SINGULAR: &'static str = "Store";
    const PLURAL: &'static str = "Stores";
    const NOT_FOUND: ErrorTemplate = STORE_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = STORE_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &StoreData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "code",
            value: data.code.clone().into(),
            already_exists: STORE_CODE_ALREADY_EXIST,
        }]
    }

    fn references(data: &StoreData) -> Vec<ReferenceCheck> {
        vec![
            ReferenceCheck::to::<Merchant>(data.merchant_id, STORE_MERCHANT_NOT_FOUND),
            ReferenceCheck::to::<StoreType>(data.store_type_id, STORE_STORE_TYPE_NOT_FOUND),
        ]
    }

    fn filter_clauses(filters: &StoreFilters) -> Vec<FilterClause> {
        let mut clauses = Vec::new();
        if let Some(merchant_id) = filters.merchant_id {
            clauses.push(FilterClause::exact("merchant_id", RecordId::from(merchant_id)));
        }
        if let Some(name) = non_blank(filters.name.as_ref()) {
            clauses.push(FilterClause::contains("name", name));
        }
        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_merchant_and_store_type() {
        let data = StoreData {
            merchant_id: RecordId::new(),
            store_type_id: RecordId::new(),
            name: "Downtown".to_string(),
            code: "ST-001".to_string(),
            address: None,
        };

        let references = Store::references(&data);
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].table, "merchants");
        assert_eq!(references[0].id, data.merchant_id);
        assert_eq!(references[0].id_column, "id");
        assert_eq!(references[0].status_column, "deleted_at");
        assert_eq!(references[1].table, "store_types");
        assert_eq!(references[1].not_found, STORE_STORE_TYPE_NOT_FOUND);
    }

    #[test]
    fn test_filter_by_merchant() {
        let merchant_id = Uuid::new_v4();
        let filters = StoreFilters {
            merchant_id: Some(merchant_id),
            name: None,
        };

        let clauses = Store::filter_clauses(&filters);
        assert_eq!(clauses, vec![FilterClause::exact("merchant_id", RecordId::from(merchant_id))]);
    }
}
