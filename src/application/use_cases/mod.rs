//! Use Cases
//!
//! Application-specific business rules. Every catalog entity is served by the
//! same generic [`CrudUseCase`]; the listing fan-out and the existence
//! pre-checks live in their own helpers.

mod crud;
mod existence;
mod paginated_query;

#[cfg(test)]
pub(crate) mod test_support;

pub use crud::{CrudUseCase, Page, DEFAULT_TIMEOUT};
pub use existence::ExistenceCheck;
pub use paginated_query::ConcurrentPaginatedQuery;
