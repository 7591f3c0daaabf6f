//! User Type DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{validate_code, validate_not_blank};
use crate::domain::models::{UserType, UserTypeData, UserTypeFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserTypePayload {
    #[validate(custom(function = "validate_code"))]
    pub code: String,

    #[validate(length(min = 1, max = 150, message = "description must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
}

impl From<UserTypePayload> for UserTypeData {
    fn from(dto: UserTypePayload) -> Self {
        Self {
            code: dto.code,
            description: dto.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserTypeQuery {
    pub description: Option<String>,
}

impl From<UserTypeQuery> for UserTypeFilters {
    fn from(query: UserTypeQuery) -> Self {
        Self {
            description: query.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserTypeResponse {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserType> for UserTypeResponse {
    fn from(user_type: UserType) -> Self {
        Self {
            id: *user_type.id.as_uuid(),
            code: user_type.code,
            description: user_type.description,
            created_at: user_type.created_at,
            updated_at: user_type.updated_at,
        }
    }
}

impl RestResource for UserType {
    const PATH: &'static str = "/user-types";

    type Payload = UserTypePayload;
    type Query = UserTypeQuery;
    type Response = UserTypeResponse;
}
