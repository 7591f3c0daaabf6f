//! In-memory collaborators for router-level tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use backoffice_catalog::application::use_cases::CrudUseCase;
use backoffice_catalog::domain::gateways::{CatalogRepository, ExistenceCheckSpec, Validation};
use backoffice_catalog::domain::models::{
    CatalogEntity, FieldValue, Merchant, Module, RecordId, Store,
};
use backoffice_catalog::infrastructure::driven_adapters::config::AppConfig;
use backoffice_catalog::infrastructure::driving_adapters::api_rest::AppState;
use backoffice_catalog::shared::errors::AppError;
use backoffice_catalog::shared::pagination::PaginationParams;

/// Repository over a fixed set of rows; writes are acknowledged and counted
pub struct StubRepository<E> {
    rows: Vec<E>,
    panic_on_list: bool,
    writes: AtomicUsize,
}

impl<E: CatalogEntity> StubRepository<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self {
            rows,
            panic_on_list: false,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn panicking() -> Self {
        Self {
            panic_on_list: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for StubRepository<E> {
    async fn list(
        &self,
        _filters: &E::Filters,
        pagination: &PaginationParams,
    ) -> Result<Vec<E>, AppError> {
        assert!(!self.panic_on_list, "connection state corrupted");
        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        Ok(self
            .rows
            .iter()
            .skip(offset)
            .take(pagination.size_page() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, _filters: &E::Filters) -> Result<i64, AppError> {
        Ok(self.rows.len() as i64)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<E>, AppError> {
        Ok(self.rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn create(&self, id: &RecordId, _data: &E::Data) -> Result<RecordId, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(*id)
    }

    async fn update(&self, _id: &RecordId, _data: &E::Data) -> Result<(), AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, _id: &RecordId) -> Result<bool, AppError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Existence answers driven by explicit sets
#[derive(Default)]
pub struct StubValidation {
    /// `table.column=value` entries that are already taken
    taken: Mutex<HashSet<String>>,
    missing: Mutex<HashSet<Uuid>>,
    deleted: Mutex<HashSet<Uuid>>,
}

impl StubValidation {
    pub fn take(self, table: &str, column: &str, value: &str) -> Self {
        self.taken
            .lock()
            .unwrap()
            .insert(format!("{table}.{column}={value}"));
        self
    }

    pub fn missing(self, id: Uuid) -> Self {
        self.missing.lock().unwrap().insert(id);
        self
    }

    pub fn deleted(self, id: Uuid) -> Self {
        self.deleted.lock().unwrap().insert(id);
        self
    }
}

#[async_trait]
impl Validation for StubValidation {
    async fn validate_existence(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError> {
        let key = format!("{}.{}={}", spec.table, spec.id_column, spec.id_value);
        Ok(self.taken.lock().unwrap().contains(&key))
    }

    async fn record_exists(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError> {
        let FieldValue::Uuid(id) = &spec.id_value else {
            return Ok(false);
        };
        if self.missing.lock().unwrap().contains(id) {
            return Ok(false);
        }
        if spec.deleted_column.is_some() && self.deleted.lock().unwrap().contains(id) {
            return Ok(false);
        }
        Ok(true)
    }
}

/// Repositories for every catalog resource; unset ones are empty
#[derive(Default)]
pub struct Catalog {
    pub merchants: Option<Arc<StubRepository<Merchant>>>,
    pub modules: Option<Arc<StubRepository<Module>>>,
    pub stores: Option<Arc<StubRepository<Store>>>,
}

fn use_case<E: CatalogEntity>(
    repository: Option<Arc<StubRepository<E>>>,
    validation: &Arc<dyn Validation>,
    timeout: Duration,
) -> Arc<CrudUseCase<E>> {
    let repository: Arc<dyn CatalogRepository<E>> = match repository {
        Some(repository) => repository,
        None => Arc::new(StubRepository::new(Vec::new())),
    };
    Arc::new(CrudUseCase::new(repository, Arc::clone(validation), timeout))
}

/// Application state over in-memory collaborators
pub fn memory_state(config: AppConfig, catalog: Catalog, validation: StubValidation) -> AppState {
    let validation: Arc<dyn Validation> = Arc::new(validation);
    let timeout = config.use_case.timeout();

    AppState {
        config: Arc::new(config),
        merchants: use_case(catalog.merchants, &validation, timeout),
        modules: use_case(catalog.modules, &validation, timeout),
        receipt_types: use_case(None, &validation, timeout),
        store_types: use_case(None, &validation, timeout),
        stores: use_case(catalog.stores, &validation, timeout),
        user_types: use_case(None, &validation, timeout),
        views: use_case(None, &validation, timeout),
    }
}
