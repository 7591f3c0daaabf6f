//! User Type Domain Model
//!
//! Roles a back-office user can be assigned.

use chrono::{DateTime, Utc};

use crate::domain::models::catalog::{CatalogEntity, UniqueField};
use crate::domain::models::record::{non_blank, FilterClause, RecordId};
use crate::shared::errors::{ErrorLayer, ErrorLevel, ErrorTemplate};

pub const USER_TYPE_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_USER_TYPE_NOT_FOUND",
    "User type not found",
    404,
)
.with_level(ErrorLevel::Warning);

pub const USER_TYPE_ID_HAS_BEEN_DELETED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_USER_TYPE_ID_HAS_BEEN_DELETED",
    "User type has already been deleted",
    409,
)
.with_level(ErrorLevel::Warning);

pub const USER_TYPE_CODE_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::UseCase,
    "ERR_USER_TYPE_CODE_ALREADY_EXIST",
    "A user type with this code already exists",
    409,
)
.with_level(ErrorLevel::Warning);

#[derive(Debug, Clone)]
pub struct UserTypeData {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserTypeFilters {
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserType {
    pub id: RecordId,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntity for UserType {
    type Data = UserTypeData;
    type Filters = UserTypeFilters;

    const TABLE: &'static str = "user_types";
    const SINGULAR: &'static str = "UserType";
    const PLURAL: &'static str = "UserTypes";
    const NOT_FOUND: ErrorTemplate = USER_TYPE_NOT_FOUND;
    const ID_HAS_BEEN_DELETED: ErrorTemplate = USER_TYPE_ID_HAS_BEEN_DELETED;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn unique_fields(data: &UserTypeData) -> Vec<UniqueField> {
        vec![UniqueField {
            column: "code",
            value: data.code.clone().into(),
            already_exists: USER_TYPE_CODE_ALREADY_EXIST,
        }]
    }

    fn filter_clauses(filters: &UserTypeFilters) -> Vec<FilterClause> {
        non_blank(filters.description.as_ref())
            .map(|description| FilterClause::contains("description", description))
            .into_iter()
            .collect()
    }
}
