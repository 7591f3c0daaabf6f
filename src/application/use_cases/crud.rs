//! Catalog CRUD Use Case
//!
//! One generic use case serves every catalog entity. Each operation runs
//! under a fresh request deadline and a panic guard, and annotates any error
//! with the operation name (`GetMerchants`, `CreateStore`, ...).

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::use_cases::existence::ExistenceCheck;
use crate::application::use_cases::paginated_query::ConcurrentPaginatedQuery;
use crate::domain::gateways::{CatalogRepository, ExistenceCheckSpec, Validation};
use crate::domain::models::{CatalogEntity, RecordId, UniqueField};
use crate::shared::context::RequestContext;
use crate::shared::errors::{AppError, DUPLICATE_KEY, RECORD_NOT_FOUND};
use crate::shared::pagination::{PaginationParams, PaginationResults};
use crate::shared::panic_guard::PanicGuard;

/// Deadline applied to a use-case call when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// One page of records with its pagination metadata
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub rows: Vec<E>,
    pub pagination: PaginationResults,
}

/// Use case for listing, reading, creating, updating and deleting `E`
pub struct CrudUseCase<E: CatalogEntity> {
    repository: Arc<dyn CatalogRepository<E>>,
    existence: ExistenceCheck,
    timeout: Duration,
}

impl<E: CatalogEntity> CrudUseCase<E> {
    /// Create a new CrudUseCase
    #[must_use]
    pub fn new(
        repository: Arc<dyn CatalogRepository<E>>,
        validation: Arc<dyn Validation>,
        timeout: Duration,
    ) -> Self {
        Self {
            repository,
            existence: ExistenceCheck::new(validation),
            timeout,
        }
    }

    /// List one page of live records
    ///
    /// # Errors
    ///
    /// Returns the repository's error for either the rows or the count query
    /// (rows first), or `DEADLINE_EXCEEDED`.
    pub async fn list(
        &self,
        filters: E::Filters,
        pagination: PaginationParams,
    ) -> Result<Page<E>, AppError> {
        let function = format!("Get{}", E::PLURAL);
        let ctx = RequestContext::with_timeout(self.timeout);

        self.guarded(&function, &ctx, async {
            tracing::debug!(
                entity = E::PLURAL,
                page = pagination.page(),
                size_page = pagination.size_page(),
                "Listing records"
            );

            let (rows, total) = ConcurrentPaginatedQuery::run(
                &ctx,
                self.repository.list(&filters, &pagination),
                self.repository.count(&filters),
            )
            .await?;

            tracing::debug!(entity = E::PLURAL, count = rows.len(), total, "Found records");
            Ok(Page {
                rows,
                pagination: PaginationResults::new(&pagination, total),
            })
        })
        .await
    }

    /// Get a live record by ID
    ///
    /// # Errors
    ///
    /// Returns the entity's `NOT_FOUND` if there is no live record.
    pub async fn get_by_id(&self, id: &RecordId) -> Result<E, AppError> {
        let function = format!("Get{}ById", E::SINGULAR);
        let ctx = RequestContext::with_timeout(self.timeout);

        self.guarded(&function, &ctx, async {
            tracing::debug!(entity = E::SINGULAR, id = %id, "Getting record by ID");

            self.repository.find_by_id(id).await?.ok_or_else(|| {
                tracing::warn!(entity = E::SINGULAR, id = %id, "Record not found");
                E::NOT_FOUND.to_error()
            })
        })
        .await
    }

    /// Create a record and return its new ID
    ///
    /// # Errors
    ///
    /// Returns an `ALREADY_EXIST` template when a unique value is taken, a
    /// reference's `NOT_FOUND` template when a referenced row is missing, or
    /// the repository's error.
    pub async fn create(&self, data: E::Data) -> Result<RecordId, AppError> {
        let function = format!("Create{}", E::SINGULAR);
        let ctx = RequestContext::with_timeout(self.timeout);

        self.guarded(&function, &ctx, async {
            tracing::info!(entity = E::SINGULAR, "Creating record");

            let unique_fields = E::unique_fields(&data);
            for field in &unique_fields {
                let spec = ExistenceCheckSpec::new(E::TABLE, field.column, field.value.clone());
                self.existence
                    .ensure_available(&spec, &field.already_exists)
                    .await?;
            }
            self.ensure_references(&data).await?;

            let id = RecordId::new();
            let created = self
                .repository
                .create(&id, &data)
                .await
                .map_err(|err| reclassify_duplicate(err, &unique_fields))?;

            tracing::info!(entity = E::SINGULAR, id = %created, "Record created successfully");
            Ok(created)
        })
        .await
    }

    /// Replace a live record
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`, `ID_HAS_BEEN_DELETED`, an `ALREADY_EXIST` or
    /// reference template, or the repository's error.
    pub async fn update(&self, id: &RecordId, data: E::Data) -> Result<(), AppError> {
        let function = format!("Update{}", E::SINGULAR);
        let ctx = RequestContext::with_timeout(self.timeout);

        self.guarded(&function, &ctx, async {
            tracing::info!(entity = E::SINGULAR, id = %id, "Updating record");

            self.ensure_live(id).await?;

            let unique_fields = E::unique_fields(&data);
            for field in &unique_fields {
                let spec = ExistenceCheckSpec::new(E::TABLE, field.column, field.value.clone())
                    .excluding(E::ID_COLUMN, *id);
                self.existence
                    .ensure_available(&spec, &field.already_exists)
                    .await?;
            }
            self.ensure_references(&data).await?;

            self.repository.update(id, &data).await.map_err(|err| {
                if RECORD_NOT_FOUND.matches(&err) {
                    AppError::use_case()
                        .copy_code_description(&E::NOT_FOUND)
                        .with_raw(err)
                } else {
                    reclassify_duplicate(err, &unique_fields)
                }
            })?;

            tracing::info!(entity = E::SINGULAR, id = %id, "Record updated successfully");
            Ok(())
        })
        .await
    }

    /// Soft delete a live record
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND`, `ID_HAS_BEEN_DELETED`, or the repository's error.
    pub async fn delete(&self, id: &RecordId) -> Result<bool, AppError> {
        let function = format!("Delete{}", E::SINGULAR);
        let ctx = RequestContext::with_timeout(self.timeout);

        self.guarded(&function, &ctx, async {
            tracing::info!(entity = E::SINGULAR, id = %id, "Soft deleting record");

            self.ensure_live(id).await?;
            let deleted = self.repository.delete(id).await?;

            tracing::info!(entity = E::SINGULAR, id = %id, deleted, "Record soft deleted");
            Ok(deleted)
        })
        .await
    }

    /// Panic guard outermost, then the deadline, then the operation.
    /// Every error leaving here carries `function`.
    async fn guarded<T, F>(
        &self,
        function: &str,
        ctx: &RequestContext,
        operation: F,
    ) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        PanicGuard::run(ctx.run(operation))
            .await
            .map_err(|err| err.with_function(function))
    }

    async fn ensure_live(&self, id: &RecordId) -> Result<(), AppError> {
        let spec = ExistenceCheckSpec::record::<E>(*id);
        self.existence.ensure_present(&spec, &E::NOT_FOUND).await?;
        self.existence
            .ensure_present(&spec.not_deleted(E::STATUS_COLUMN), &E::ID_HAS_BEEN_DELETED)
            .await
    }

    async fn ensure_references(&self, data: &E::Data) -> Result<(), AppError> {
        for reference in E::references(data) {
            let spec = ExistenceCheckSpec::new(reference.table, reference.id_column, reference.id)
                .not_deleted(reference.status_column);
            self.existence
                .ensure_present(&spec, &reference.not_found)
                .await?;
        }
        Ok(())
    }
}

/// Map a store-level unique violation onto the entity's own template
fn reclassify_duplicate(err: AppError, unique_fields: &[UniqueField]) -> AppError {
    if !DUPLICATE_KEY.matches(&err) {
        return err;
    }

    let field = unique_fields
        .iter()
        .find(|field| err.messages().iter().any(|column| column == field.column));

    match field {
        Some(field) => AppError::use_case()
            .copy_code_description(&field.already_exists)
            .with_raw(err),
        None => err,
    }
}
