//! Data Transfer Objects
//!
//! Request bodies, query filters and response shapes for each catalog
//! resource, plus their `RestResource` bindings.

pub mod merchant;
pub mod module;
pub mod receipt_type;
mod rules;
pub mod store;
pub mod store_type;
pub mod user_type;
pub mod view;

pub use merchant::{MerchantPayload, MerchantQuery, MerchantResponse};
pub use module::{ModulePayload, ModuleQuery, ModuleResponse};
pub use receipt_type::{ReceiptTypePayload, ReceiptTypeQuery, ReceiptTypeResponse};
pub use store::{StorePayload, StoreQuery, StoreResponse};
pub use store_type::{StoreTypePayload, StoreTypeQuery, StoreTypeResponse};
pub use user_type::{UserTypePayload, UserTypeQuery, UserTypeResponse};
pub use view::{ViewPayload, ViewQuery, ViewResponse};
