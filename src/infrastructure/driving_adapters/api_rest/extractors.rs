//! Request Extractors
//!
//! Wrappers around axum's `Json`, `Query` and `Path` whose rejections are
//! rendered as structured `AppError`s instead of plain-text bodies.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::domain::models::RecordId;
use crate::shared::errors::{AppError, INVALID_ID, INVALID_PAYLOAD};
use crate::shared::pagination::{PageLimits, PaginationParams};

/// JSON body that has passed its `validator` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                INVALID_PAYLOAD
                    .to_error()
                    .with_function("ValidatedJson")
                    .push_message(rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| AppError::from(errors).with_function("ValidatedJson"))?;
        Ok(Self(value))
    }
}

/// Query string deserialized into `T`
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                INVALID_PAYLOAD
                    .to_error()
                    .with_function("ApiQuery")
                    .push_message(rejection.body_text())
            })?;
        Ok(Self(value))
    }
}

/// Raw `page` / `size_page` query values.
///
/// Kept as strings so a malformed value falls back to the default instead
/// of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size_page: Option<String>,
}

impl PageQuery {
    #[must_use]
    pub fn params(&self, limits: PageLimits) -> PaginationParams {
        PaginationParams::parse(self.page.as_deref(), self.size_page.as_deref(), limits)
    }
}

/// `:id` path segment parsed as a record id
#[derive(Debug, Clone, Copy)]
pub struct RecordPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for RecordPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                INVALID_ID
                    .to_error()
                    .push_message(rejection.body_text())
            })?;

        let id = RecordId::try_from(raw.as_str())
            .map_err(|err| AppError::from(err).push_message(format!("id: {raw}")))?;
        Ok(Self(id))
    }
}
