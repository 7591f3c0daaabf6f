//! Store Type DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::validate_not_blank;
use crate::domain::models::{StoreType, StoreTypeData, StoreTypeFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoreTypePayload {
    #[validate(length(min = 1, max = 150, message = "description must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(min = 1, max = 10, message = "abbreviation must be between 1 and 10 characters"))]
    pub abbreviation: Option<String>,
}

impl From<StoreTypePayload> for StoreTypeData {
    fn from(dto: StoreTypePayload) -> Self {
        Self {
            description: dto.description.trim().to_string(),
            abbreviation: dto.abbreviation,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreTypeQuery {
    pub description: Option<String>,
}

impl From<StoreTypeQuery> for StoreTypeFilters {
    fn from(query: StoreTypeQuery) -> Self {
        Self {
            description: query.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreTypeResponse {
    pub id: Uuid,
    pub description: String,
    pub abbreviation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoreType> for StoreTypeResponse {
    fn from(store_type: StoreType) -> Self {
        Self {
            id: *store_type.id.as_uuid(),
            description: store_type.description,
            abbreviation: store_type.abbreviation,
            created_at: store_type.created_at,
            updated_at: store_type.updated_at,
        }
    }
}

impl RestResource for StoreType {
    const PATH: &'static str = "/store-types";

    type Payload = StoreTypePayload;
    type Query = StoreTypeQuery;
    type Response = StoreTypeResponse;
}
