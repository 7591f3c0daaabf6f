//! View DTOs
//!
//! A view is a menu entry inside a module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{blank_uuid_as_none, validate_not_blank, validate_route};
use crate::domain::models::{RecordId, View, ViewData, ViewFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ViewPayload {
    pub module_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 250, message = "description must be between 1 and 250 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(max = 500, message = "url must be at most 500 characters"))]
    #[validate(custom(function = "validate_route"))]
    pub url: String,

    #[validate(length(max = 100, message = "icon must be at most 100 characters"))]
    pub icon: Option<String>,
}

impl From<ViewPayload> for ViewData {
    fn from(dto: ViewPayload) -> Self {
        Self {
            module_id: RecordId::from_uuid(dto.module_id),
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            url: dto.url,
            icon: dto.icon,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(default, deserialize_with = "blank_uuid_as_none")]
    pub module_id: Option<Uuid>,
    pub name: Option<String>,
}

impl From<ViewQuery> for ViewFilters {
    fn from(query: ViewQuery) -> Self {
        Self {
            module_id: query.module_id,
            name: query.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    pub id: Uuid,
    pub module_id: Uuid,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<View> for ViewResponse {
    fn from(view: View) -> Self {
        Self {
            id: *view.id.as_uuid(),
            module_id: *view.module_id.as_uuid(),
            name: view.name,
            description: view.description,
            url: view.url,
            icon: view.icon,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

impl RestResource for View {
    const PATH: &'static str = "/views";

    type Payload = ViewPayload;
    type Query = ViewQuery;
    type Response = ViewResponse;
}
