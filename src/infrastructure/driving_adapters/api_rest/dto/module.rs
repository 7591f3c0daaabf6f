//! Module DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::validate_not_blank;
use crate::domain::models::{Module, ModuleData, ModuleFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModulePayload {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 250, message = "description must be between 1 and 250 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(max = 100, message = "icon must be at most 100 characters"))]
    pub icon: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 10000, message = "position must be between 0 and 10000"))]
    pub position: i32,
}

impl From<ModulePayload> for ModuleData {
    fn from(dto: ModulePayload) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            icon: dto.icon,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleQuery {
    pub name: Option<String>,
}

impl From<ModuleQuery> for ModuleFilters {
    fn from(query: ModuleQuery) -> Self {
        Self { name: query.name }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Module> for ModuleResponse {
    fn from(module: Module) -> Self {
        Self {
            id: *module.id.as_uuid(),
            name: module.name,
            description: module.description,
            icon: module.icon,
            position: module.position,
            created_at: module.created_at,
            updated_at: module.updated_at,
        }
    }
}

impl RestResource for Module {
    const PATH: &'static str = "/modules";

    type Payload = ModulePayload;
    type Query = ModuleQuery;
    type Response = ModuleResponse;
}
