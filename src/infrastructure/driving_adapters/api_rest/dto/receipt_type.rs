//! Receipt Type DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{validate_code, validate_not_blank};
use crate::domain::models::{ReceiptType, ReceiptTypeData, ReceiptTypeFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReceiptTypePayload {
    #[validate(custom(function = "validate_code"))]
    pub code: String,

    #[validate(length(min = 1, max = 150, message = "description must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
}

impl From<ReceiptTypePayload> for ReceiptTypeData {
    fn from(dto: ReceiptTypePayload) -> Self {
        Self {
            code: dto.code,
            description: dto.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptTypeQuery {
    pub description: Option<String>,
}

impl From<ReceiptTypeQuery> for ReceiptTypeFilters {
    fn from(query: ReceiptTypeQuery) -> Self {
        Self {
            description: query.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptTypeResponse {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReceiptType> for ReceiptTypeResponse {
    fn from(receipt_type: ReceiptType) -> Self {
        Self {
            id: *receipt_type.id.as_uuid(),
            code: receipt_type.code,
            description: receipt_type.description,
            created_at: receipt_type.created_at,
            updated_at: receipt_type.updated_at,
        }
    }
}

impl RestResource for ReceiptType {
    const PATH: &'static str = "/receipt-types";

    type Payload = ReceiptTypePayload;
    type Query = ReceiptTypeQuery;
    type Response = ReceiptTypeResponse;
}
