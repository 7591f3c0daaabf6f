//! View Domain Model
//!
//! A screen of the back-office, listed under a module.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::catalog::{CatalogEntity, ReferenceCheck, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::domain::models::Module;
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const VIEW_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_VIEW_NOT_FOUND",
    "View not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const VIEW_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_VIEW_ID_HAS_BEEN_DELETED",
    "View has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const VIEW_DESCRIPTION_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_VIEW_DESCRIPTION_ALREADY_EXIST",
    "A view with this description already exists",
    409,
)
.with_level(ErrorLevel::Warning);

pub const VIEW_MODULE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_VIEW_MODULE_NOT_FOUND",
    "The module for this view does not exist",
    404,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct ViewData {
    pub module_id: RecordId,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewFilters {
    pub module_id: Option<Uuid>,
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct View {
    pub id: RecordId,
    pub module_id: RecordId,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for View {
    type Data = ViewData;
    type Filters = ViewFilters;

    const TABLE: &'static str = "views";
    const SINGULAR: &'static str = "View";
    const PLURAL: &'static str = "Views";
    const NOT_FOUND: ErrorTemplate = VIEW_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = VIEW_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &ViewData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "description",
            value: data.description.clone().into(),
            already_exists: VIEW_DESCRIPTION_ALREADY_EXIST,
        }]
    }

    fn references(data: &ViewData) -> Vec<ReferenceCheck> {
        vec![ReferenceCheck::to::<Module>(data.module_id, VIEW_MODULE_NOT_FOUND)]
    }

    fn filter_clauses(filters: &ViewFilters) -> Vec<FilterClause> {
        let mut clauses = Vec::new();
        if let Some(module_id) = filters.module_id {
            clauses.push(FilterClause::exact("module_id", RecordId::from(module_id)));
        }
        if let Some(name) = non_blank(filters.name.as_ref()) {
            clauses.push(FilterClause::contains("name", name));
        }
        clauses
    }
}
