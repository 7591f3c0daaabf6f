//! Store Type Domain Model

use chrono::{DateTime, Utc};

use crate::domain::models::catalog::{CatalogEntity, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const STORE_TYPE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_TYPE_NOT_FOUND",
    "Store type not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const STORE_TYPE_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_TYPE_ID_HAS_BEEN_DELETED",
    "Store type has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const STORE_TYPE_DESCRIPTION_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_STORE_TYPE_DESCRIPTION_ALREADY_EXIST",
    "A store type with this description already exists",
    409,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct StoreTypeData {
    pub description: String,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StoreTypeFilters {
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoreType {
    pub id: RecordId,
    pub description: String,
    pub abbreviation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for StoreType {
    type Data = StoreTypeData;
    type Filters = StoreTypeFilters;

    const TABLE: &'static str = "store_types";
    const SINGULAR: &'static str = "StoreType";
    const PLURAL: &'static str = "StoreTypes";
    const NOT_FOUND: ErrorTemplate = STORE_TYPE_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = STORE_TYPE_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &StoreTypeData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "description",
            value: data.description.clone().into(),
            already_exists: STORE_TYPE_DESCRIPTION_ALREADY_EXIST,
        }]
    }

    fn filter_clauses(filters: &StoreTypeFilters) -> Vec<FilterClause> {
        non_blank(filters.description.as_ref())
            .map(|description| FilterClause::contains("description", description))
            .into_iter()
            .collect()
    }
}
