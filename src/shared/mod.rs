//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod context;
pub mod errors;
pub mod pagination;
pub mod panic_guard;

pub use context::RequestContext;
pub use errors::{AppError, ErrorLayer, ErrorLevel, ErrorTemplate};
pub use pagination::{PageLimits, PaginationParams, PaginationResults};
pub use panic_guard::PanicGuard;
