//! Store DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{blank_uuid_as_none, validate_code, validate_not_blank};
use crate::domain::models::{RecordId, Store, StoreData, StoreFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StorePayload {
    pub merchant_id: Uuid,

    pub store_type_id: Uuid,

    #[validate(length(min = 1, max = 150, message = "name must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_code"))]
    pub code: String,

    #[validate(length(max = 250, message = "address must be at most 250 characters"))]
    pub address: Option<String>,
}

impl From<StorePayload> for StoreData {
    fn from(dto: StorePayload) -> Self {
        Self {
            merchant_id: RecordId::from_uuid(dto.merchant_id),
            store_type_id: RecordId::from_uuid(dto.store_type_id),
            name: dto.name.trim().to_string(),
            code: dto.code,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreQuery {
    #[serde(default, deserialize_with = "blank_uuid_as_none")]
    pub merchant_id: Option<Uuid>,
    pub name: Option<String>,
}

impl From<StoreQuery> for StoreFilters {
    fn from(query: StoreQuery) -> Self {
        Self {
            merchant_id: query.merchant_id,
            name: query.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub store_type_id: Uuid,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: *store.id.as_uuid(),
            merchant_id: *store.merchant_id.as_uuid(),
            store_type_id: *store.store_type_id.as_uuid(),
            name: store.name,
            code: store.code,
            address: store.address,
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

impl RestResource for Store {
    const PATH: &'static str = "/stores";

    type Payload = StorePayload;
    type Query = StoreQuery;
    type Response = StoreResponse;
}
