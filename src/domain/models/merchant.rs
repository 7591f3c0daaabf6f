//! Merchant Domain Model
//!
//! A merchant is the legal entity that owns stores. Its tax document is
//! unique across the registry.

use chrono::{DateTime, Utc};

use crate::domain::models::catalog::{CatalogEntity, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const MERCHANT_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MERCHANT_NOT_FOUND",
    "Merchant not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const MERCHANT_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MERCHANT_ID_HAS_BEEN_DELETED",
    "Merchant has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const MERCHANT_DOCUMENT_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MERCHANT_DOCUMENT_ALREADY_EXIST",
    "A merchant with this document already exists",
    409,
)
.with_level(ErrorLevel::Warning);

/// Data required to create or replace a Merchant
#[derive(Debug, Clone)]
pub struct MerchantData {
    pub name: String,
    pub document: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MerchantFilters {
    pub name: Option<String>,
    pub document: Option<String>,
}

/// Merchant domain entity
#[derive(Debug, Clone)]
pub struct Merchant {
    pub id: RecordId,
    pub name: String,
    pub document: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for Merchant {
    type Data = MerchantData;
    type Filters = MerchantFilters;

    const TABLE: &'static str = "merchants";
    const SINGULAR: &'static str = "Merchant";
    const PLURAL: &'static str = "Merchants";
    const NOT_FOUND: ErrorTemplate = MERCHANT_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = MERCHANT_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &MerchantData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "document",
            value: data.document.clone().into(),
            already_exists: MERCHANT_DOCUMENT_ALREADY_EXIST,
        }]
    }

    fn filter_clauses(filters: &MerchantFilters) -> Vec<FilterClause> {
        let mut clauses = Vec::new();
        if let Some(name) = non_blank(filters.name.as_ref()) {
            clauses.push(FilterClause::contains("name", name));
        }
        if let Some(document) = non_blank(filters.document.as_ref()) {
            clauses.push(FilterClause::exact("document", document));
        }
        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::record::{FieldValue, MatchMode};

    #[test]
    fn test_document_is_unique() {
        let data = MerchantData {
            name: "Bodega Central".to_string(),
            document: "20123456789".to_string(),
            address: None,
            phone: None,
            email: None,
        };

        let fields = Merchant::unique_fields(&data);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].column, "document");
        assert_eq!(fields[0].value, FieldValue::Text("20123456789".to_string()));
        assert_eq!(fields[0].already_exists, MERCHANT_DOCUMENT_ALREADY_EXIST);
    }

    #[test]
    fn test_filter_clauses_skip_blank_values() {
        let filters = MerchantFilters {
            name: Some("  ".to_string()),
            document: Some("20123456789".to_string()),
        };

        let clauses = Merchant::filter_clauses(&filters);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].column, "document");
        assert_eq!(clauses[0].mode, MatchMode::Exact);
    }

    #[test]
    fn test_no_references() {
        let data = MerchantData {
            name: "n".to_string(),
            document: "d".to_string(),
            address: None,
            phone: None,
            email: None,
        };
        assert!(Merchant::references(&data).is_empty());
    }
}
