//! Merchant DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::rules::{validate_document, validate_not_blank, validate_phone};
use crate::domain::models::{Merchant, MerchantData, MerchantFilters};
use crate::infrastructure::driving_adapters::api_rest::handlers::RestResource;

/// Body for creating or replacing a merchant
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MerchantPayload {
    #[validate(length(min = 1, max = 150, message = "name must be between 1 and 150 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_document"))]
    pub document: String,

    #[validate(length(max = 250, message = "address must be at most 250 characters"))]
    pub address: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
}

impl From<MerchantPayload> for MerchantData {
    fn from(dto: MerchantPayload) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            document: dto.document,
            address: dto.address,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MerchantQuery {
    pub name: Option<String>,
    pub document: Option<String>,
}

impl From<MerchantQuery> for MerchantFilters {
    fn from(query: MerchantQuery) -> Self {
        Self {
            name: query.name,
            document: query.document,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MerchantResponse {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Merchant> for MerchantResponse {
    fn from(merchant: Merchant) -> Self {
        Self {
            id: *merchant.id.as_uuid(),
            name: merchant.name,
            document: merchant.document,
            address: merchant.address,
            phone: merchant.phone,
            email: merchant.email,
            created_at: merchant.created_at,
            updated_at: merchant.updated_at,
        }
    }
}

impl RestResource for Merchant {
    const PATH: &'static str = "/merchants";

    type Payload = MerchantPayload;
    type Query = MerchantQuery;
    type Response = MerchantResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> MerchantPayload {
        MerchantPayload {
            name: "Bodega Central".to_string(),
            document: "20123456789".to_string(),
            address: None,
            phone: Some("+51 1 5550100".to_string()),
            email: Some("billing@bodega.example".to_string()),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_document_and_email() {
        let dto = MerchantPayload {
            document: "ABC".to_string(),
            email: Some("not-an-email".to_string()),
            ..payload()
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("document"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let dto = MerchantPayload {
            name: "   ".to_string(),
            ..payload()
        };

        assert!(dto.validate().is_err());
    }
}
