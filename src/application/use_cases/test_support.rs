//! Test doubles for the catalog repository

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::CatalogRepository;
use crate::domain::models::{CatalogEntity, RecordId};
use crate::shared::errors::AppError;
use crate::shared::pagination::PaginationParams;

pub(crate) struct MockCatalogRepository<E: CatalogEntity> {
    list_result: Mutex<Option<Result<Vec<E>, AppError>>>,
    count_result: Mutex<Option<Result<i64, AppError>>>,
    find_by_id_result: Mutex<Option<Result<Option<E>, AppError>>>,
    create_result: Mutex<Option<Result<RecordId, AppError>>>,
    update_result: Mutex<Option<Result<(), AppError>>>,
    delete_result: Mutex<Option<Result<bool, AppError>>>,
    panic_on_list: bool,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl<E: CatalogEntity> MockCatalogRepository<E> {
    pub fn new() -> Self {
        Self {
            list_result: Mutex::new(None),
            count_result: Mutex::new(None),
            find_by_id_result: Mutex::new(None),
            create_result: Mutex::new(None),
            update_result: Mutex::new(None),
            delete_result: Mutex::new(None),
            panic_on_list: false,
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_list(self, result: Result<Vec<E>, AppError>) -> Self {
        *self.list_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_count(self, result: Result<i64, AppError>) -> Self {
        *self.count_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_by_id(self, result: Result<Option<E>, AppError>) -> Self {
        *self.find_by_id_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_create(self, result: Result<RecordId, AppError>) -> Self {
        *self.create_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_update(self, result: Result<(), AppError>) -> Self {
        *self.update_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete(self, result: Result<bool, AppError>) -> Self {
        *self.delete_result.lock().unwrap() = Some(result);
        self
    }

    pub fn panicking_on_list(mut self) -> Self {
        self.panic_on_list = true;
        self
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for MockCatalogRepository<E> {
    async fn list(
        &self,
        _filters: &E::Filters,
        _pagination: &PaginationParams,
    ) -> Result<Vec<E>, AppError> {
        assert!(!self.panic_on_list, "row mapper dereferenced a missing column");
        self.list_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn count(&self, _filters: &E::Filters) -> Result<i64, AppError> {
        self.count_result.lock().unwrap().take().unwrap_or(Ok(0))
    }

    async fn find_by_id(&self, _id: &RecordId) -> Result<Option<E>, AppError> {
        self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn create(&self, id: &RecordId, _data: &E::Data) -> Result<RecordId, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_result.lock().unwrap().take().unwrap_or(Ok(*id))
    }

    async fn update(&self, _id: &RecordId, _data: &E::Data) -> Result<(), AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.update_result.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn delete(&self, _id: &RecordId) -> Result<bool, AppError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(true))
    }
}
