//! Receipt Type Domain Model
//!
//! Kinds of sales receipts a store can issue (invoice, ticket, ...).

use chrono::{DateTime, Utc};

use crate::domain::models::catalog::{CatalogEntity, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const RECEIPT_TYPE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_RECEIPT_TYPE_NOT_FOUND",
    "Receipt type not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const RECEIPT_TYPE_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_RECEIPT_TYPE_ID_HAS_BEEN_DELETED",
    "Receipt type has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const RECEIPT_TYPE_CODE_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_RECEIPT_TYPE_CODE_ALREADY_EXIST",
    "A receipt type with this code already exists",
    409,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct ReceiptTypeData {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReceiptTypeFilters {
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReceiptType {
    pub id: RecordId,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for ReceiptType {
    type Data = ReceiptTypeData;
    type Filters = ReceiptTypeFilters;

    const TABLE: &'static str = "receipt_types";
    const SINGULAR: &'static str = "ReceiptType";
    const PLURAL: &'static str = "ReceiptTypes";
    const NOT_FOUND: ErrorTemplate = RECEIPT_TYPE_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = RECEIPT_TYPE_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &ReceiptTypeData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "code",
            value: data.code.clone().into(),
            already_exists: RECEIPT_TYPE_CODE_ALREADY_EXIST,
        }]
    }

    fn filter_clauses(filters: &ReceiptTypeFilters) -> Vec<FilterClause> {
        non_blank(filters.description.as_ref())
            .map(|description| FilterClause::contains("description", description))
            .into_iter()
            .collect()
    }
}
