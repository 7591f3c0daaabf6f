//! Success envelope: `{data?, pagination?, status}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::shared::pagination::PaginationResults;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationResults>,
    /// Numeric HTTP status, repeated in the body
    pub status: u16,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::with_status(StatusCode::OK, Some(data))
    }

    #[must_use]
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, Some(data))
    }

    #[must_use]
    pub fn page(data: T, pagination: PaginationResults) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::ok(data)
        }
    }

    fn with_status(status: StatusCode, data: Option<T>) -> Self {
        Self {
            data,
            pagination: None,
            status: status.as_u16(),
        }
    }
}

impl ApiResponse<()> {
    /// `{status}` only
    #[must_use]
    pub fn empty() -> Self {
        Self::with_status(StatusCode::OK, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
