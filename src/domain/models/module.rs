//! Module Domain Model
//!
//! A module groups back-office views into a menu section.

use chrono::{DateTime, Utc};

use crate::domain::models::catalog::{CatalogEntity, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const MODULE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MODULE_NOT_FOUND",
    "Module not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const MODULE_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MODULE_ID_HAS_BEEN_DELETED",
    "Module has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const MODULE_DESCRIPTION_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_MODULE_DESCRIPTION_ALREADY_EXIST",
    "A module with this description already exists",
    409,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct ModuleData {
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ModuleFilters {
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    /// Menu ordering, ascending
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for Module {
    type Data = ModuleData;
    type Filters = ModuleFilters;

    const TABLE: &'static str = "modules";
    const SINGULAR: &'static str = "Module";
    const PLURAL: &'static str = "Modules";
    const NOT_FOUND: ErrorTemplate = MODULE_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = MODULE_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &ModuleData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "description",
            value: data.description.clone().into(),
            already_exists: MODULE_DESCRIPTION_ALREADY_EXIST,
        }]
    }

    fn filter_clauses(filters: &ModuleFilters) -> Vec<FilterClause> {
        non_blank(filters.name.as_ref())
            .map(|name| FilterClause::contains("name", name))
            .into_iter()
            .collect()
    }
}
