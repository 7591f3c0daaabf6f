//! Domain Models
//!
//! Catalog entities, their data and filter shapes, and the error templates
//! for their business rules.

pub mod catalog;
pub mod merchant;
pub mod module;
pub mod receipt_type;
pub mod record;
pub mod store;
pub mod store_type;
pub mod user_type;
pub mod view;

pub use catalog::{CatalogEntity, ReferenceCheck, UniqueField};
pub use merchant::{Merchant, MerchantData, MerchantFilters};
pub use module::{Module, ModuleData, ModuleFilters};
pub use receipt_type::{ReceiptType, ReceiptTypeData, ReceiptTypeFilters};
pub use record::{FieldValue, FilterClause, MatchMode, RecordId};
pub use store::{Store, StoreData, StoreFilters};
pub use store_type::{StoreType, StoreTypeData, StoreTypeFilters};
pub use user_type::{UserType, UserTypeData, UserTypeFilters};
pub use view::{View, ViewData, ViewFilters};
