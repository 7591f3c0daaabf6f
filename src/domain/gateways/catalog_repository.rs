//! Catalog Repository Gateway
//!
//! Abstract trait defining the persistence contract shared by every catalog
//! entity. Every failure comes back as an Infrastructure-layer `AppError`.

use async_trait::async_trait;

use crate::domain::models::catalog::CatalogEntity;
use crate::domain::models::record::RecordId;
use crate::shared::errors::AppError;
use crate::shared::pagination::PaginationParams;

/// Repository trait for catalog persistence operations
#[async_trait]
pub trait CatalogRepository<E: CatalogEntity>: Send + Sync {
    /// One page of live records matching `filters`
    async fn list(
        &self,
        filters: &E::Filters,
        pagination: &PaginationParams,
    ) -> Result<Vec<E>, AppError>;

    /// Number of live records matching `filters`
    async fn count(&self, filters: &E::Filters) -> Result<i64, AppError>;

    /// Find a live record by its ID
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<E>, AppError>;

    /// Insert a record under a caller-chosen ID
    async fn create(&self, id: &RecordId, data: &E::Data) -> Result<RecordId, AppError>;

    /// Replace a live record. Reports `RECORD_NOT_FOUND` when no live row matched.
    async fn update(&self, id: &RecordId, data: &E::Data) -> Result<(), AppError>;

    /// Soft delete a record (sets `deleted_at`)
    async fn delete(&self, id: &RecordId) -> Result<bool, AppError>;
}
