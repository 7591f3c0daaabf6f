//! Catalog Handlers
//!
//! HTTP handlers shared by every catalog resource. Each resource mounts
//! the same five routes under its own prefix; all of them require JWT
//! authentication.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::application::use_cases::CrudUseCase;
use crate::domain::models::{CatalogEntity, RecordId};
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::extractors::{
    ApiQuery, PageQuery, RecordPath, ValidatedJson,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::response::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::AppError;

/// HTTP mapping of a catalog entity
pub trait RestResource: CatalogEntity {
    /// Route prefix, e.g. `/merchants`
    const PATH: &'static str;

    /// Body of `POST /` and `PUT /:id`
    type Payload: DeserializeOwned + Validate + Into<Self::Data> + Send + 'static;
    /// Listing filters read from the query string
    type Query: DeserializeOwned + Into<Self::Filters> + Send + 'static;
    type Response: Serialize + From<Self> + Send + 'static;
}

/// Create the router for one catalog resource
pub fn router<R>() -> Router<AppState>
where
    R: RestResource,
    Arc<CrudUseCase<R>>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:id",
            get(get_by_id::<R>).put(update::<R>).delete(delete::<R>),
        )
}

/// GET / - One page of live records
///
/// * 200 OK - `{data, pagination, status}`
/// * 400 Bad Request - Malformed filter
/// * 401 Unauthorized - Missing or invalid JWT token
async fn list<R: RestResource>(
    _auth: JwtAuth,
    State(use_case): State<Arc<CrudUseCase<R>>>,
    State(config): State<Arc<AppConfig>>,
    ApiQuery(page): ApiQuery<PageQuery>,
    ApiQuery(filters): ApiQuery<R::Query>,
) -> Result<ApiResponse<Vec<R::Response>>, AppError> {
    let page = use_case
        .list(filters.into(), page.params(config.pagination))
        .await?;

    let rows = page.rows.into_iter().map(R::Response::from).collect();
    Ok(ApiResponse::page(rows, page.pagination))
}

/// GET /:id - A live record
///
/// * 200 OK - `{data, status}`
/// * 400 Bad Request - Malformed id
/// * 404 Not Found - No live record
async fn get_by_id<R: RestResource>(
    _auth: JwtAuth,
    State(use_case): State<Arc<CrudUseCase<R>>>,
    RecordPath(id): RecordPath,
) -> Result<ApiResponse<R::Response>, AppError> {
    let record = use_case.get_by_id(&id).await?;
    Ok(ApiResponse::ok(R::Response::from(record)))
}

/// POST / - Create a record
///
/// * 201 Created - `{data: id, status}`
/// * 400 Bad Request - Validation error
/// * 404 Not Found - A referenced record does not exist
/// * 409 Conflict - A unique value is already taken
async fn create<R: RestResource>(
    _auth: JwtAuth,
    State(use_case): State<Arc<CrudUseCase<R>>>,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> Result<ApiResponse<RecordId>, AppError> {
    let id = use_case.create(payload.into()).await?;
    Ok(ApiResponse::created(id))
}

/// PUT /:id - Replace a record
///
/// * 200 OK - `{status}`
/// * 404 Not Found - No such record, or a missing reference
/// * 409 Conflict - Record deleted, or a unique value is taken
async fn update<R: RestResource>(
    _auth: JwtAuth,
    State(use_case): State<Arc<CrudUseCase<R>>>,
    RecordPath(id): RecordPath,
    ValidatedJson(payload): ValidatedJson<R::Payload>,
) -> Result<ApiResponse<()>, AppError> {
    use_case.update(&id, payload.into()).await?;
    Ok(ApiResponse::empty())
}

/// DELETE /:id - Soft delete a record
///
/// * 200 OK - `{data: bool, status}`
/// * 404 Not Found - No such record
/// * 409 Conflict - Already deleted
async fn delete<R: RestResource>(
    _auth: JwtAuth,
    State(use_case): State<Arc<CrudUseCase<R>>>,
    RecordPath(id): RecordPath,
) -> Result<ApiResponse<bool>, AppError> {
    let deleted = use_case.delete(&id).await?;
    Ok(ApiResponse::ok(deleted))
}
