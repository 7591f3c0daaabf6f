//! Table rows for each catalog entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::postgres::PgCatalogEntity;
use crate::domain::models::{
    FieldValue, Merchant, MerchantData, Module, ModuleData, ReceiptType, ReceiptTypeData,
    RecordId, Store, StoreData, StoreType, StoreTypeData, UserType, UserTypeData, View, ViewData,
};

#[derive(Debug, sqlx::FromRow)]
pub struct MerchantRow {
    id: Uuid,
    name: String,
    document: String,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for Merchant {
    type Row = MerchantRow;

    const SELECT_COLUMNS: &'static str =
        "id, name, document, address, phone, email, created_at, updated_at";

    fn from_row(row: MerchantRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            name: row.name,
            document: row.document,
            address: row.address,
            phone: row.phone,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &MerchantData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", data.name.clone().into()),
            ("document", data.document.clone().into()),
            ("address", data.address.clone().into()),
            ("phone", data.phone.clone().into()),
            ("email", data.email.clone().into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ModuleRow {
    id: Uuid,
    name: String,
    description: String,
    icon: Option<String>,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for Module {
    type Row = ModuleRow;

    const SELECT_COLUMNS: &'static str =
        "id, name, description, icon, position, created_at, updated_at";
    const ORDER_BY: &'static str = "position ASC, name ASC, id";

    fn from_row(row: ModuleRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            icon: row.icon,
            position: row.position,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &ModuleData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("name", data.name.clone().into()),
            ("description", data.description.clone().into()),
            ("icon", data.icon.clone().into()),
            ("position", data.position.into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ReceiptTypeRow {
    id: Uuid,
    code: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for ReceiptType {
    type Row = ReceiptTypeRow;

    const SELECT_COLUMNS: &'static str = "id, code, description, created_at, updated_at";
    const ORDER_BY: &'static str = "code ASC, id";

    fn from_row(row: ReceiptTypeRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            code: row.code,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &ReceiptTypeData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("code", data.code.clone().into()),
            ("description", data.description.clone().into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct StoreTypeRow {
    id: Uuid,
    description: String,
    abbreviation: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for StoreType {
    type Row = StoreTypeRow;

    const SELECT_COLUMNS: &'static str = "id, description, abbreviation, created_at, updated_at";
    const ORDER_BY: &'static str = "description ASC, id";

    fn from_row(row: StoreTypeRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            description: row.description,
            abbreviation: row.abbreviation,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &StoreTypeData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("description", data.description.clone().into()),
            ("abbreviation", data.abbreviation.clone().into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct StoreRow {
    id: Uuid,
    merchant_id: Uuid,
    store_type_id: Uuid,
    name: String,
    code: String,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for Store {
    type Row = StoreRow;

    const SELECT_COLUMNS: &'static str =
        "id, merchant_id, store_type_id, name, code, address, created_at, updated_at";

    fn from_row(row: StoreRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            merchant_id: RecordId::from_uuid(row.merchant_id),
            store_type_id: RecordId::from_uuid(row.store_type_id),
            name: row.name,
            code: row.code,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &StoreData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("merchant_id", data.merchant_id.into()),
            ("store_type_id", data.store_type_id.into()),
            ("name", data.name.clone().into()),
            ("code", data.code.clone().into()),
            ("address", data.address.clone().into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct UserTypeRow {
    id: Uuid,
    code: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for UserType {
    type Row = UserTypeRow;

    const SELECT_COLUMNS: &'static str = "id, code, description, created_at, updated_at";
    const ORDER_BY: &'static str = "code ASC, id";

    fn from_row(row: UserTypeRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            code: row.code,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &UserTypeData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("code", data.code.clone().into()),
            ("description", data.description.clone().into()),
        ]
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ViewRow {
    id: Uuid,
    module_id: Uuid,
    name: String,
    description: String,
    url: String,
    icon: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PgCatalogEntity for View {
    type Row = ViewRow;

    const SELECT_COLUMNS: &'static str =
        "id, module_id, name, description, url, icon, created_at, updated_at";
    const ORDER_BY: &'static str = "name ASC, id";

    fn from_row(row: ViewRow) -> Self {
        Self {
            id: RecordId::from_uuid(row.id),
            module_id: RecordId::from_uuid(row.module_id),
            name: row.name,
            description: row.description,
            url: row.url,
            icon: row.icon,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn column_values(data: &ViewData) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("module_id", data.module_id.into()),
            ("name", data.name.clone().into()),
            ("description", data.description.clone().into()),
            ("url", data.url.clone().into()),
            ("icon", data.icon.clone().into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CatalogEntity;

    #[test]
    fn test_unique_columns_are_written() {
        let data = StoreData {
            merchant_id: RecordId::new(),
            store_type_id: RecordId::new(),
            name: "Downtown".to_string(),
            code: "ST-001".to_string(),
            address: None,
        };

        let columns: Vec<&str> = Store::column_values(&data).into_iter().map(|(c, _)| c).collect();
        for field in Store::unique_fields(&data) {
            assert!(columns.contains(&field.column));
        }
        assert!(columns.contains(&"merchant_id"));
    }

    #[test]
    fn test_optional_columns_bind_null() {
        let data = StoreTypeData {
            description: "Kiosk".to_string(),
            abbreviation: None,
        };

        let values = StoreType::column_values(&data);
        assert_eq!(values[1], ("abbreviation", FieldValue::OptionalText(None)));
    }
}
