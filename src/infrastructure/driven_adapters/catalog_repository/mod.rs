//! Catalog Repository Adapters

mod postgres;
mod rows;

pub use postgres::{PgCatalogEntity, PostgresCatalogRepository};
pub(crate) use postgres::push_value;
pub use rows::{
    MerchantRow, ModuleRow, ReceiptTypeRow, StoreRow, StoreTypeRow, UserTypeRow, ViewRow,
};
