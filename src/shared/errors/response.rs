//! HTTP rendering of [`AppError`]

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::{AppError, ErrorLayer, ErrorLevel};

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub code: &'a str,
    pub description: &'a str,
    pub layer: ErrorLayer,
    pub level: ErrorLevel,
    pub http_status: u16,
    pub messages: &'a [String],
    pub raw: Option<String>,
}

impl<'a> From<&'a AppError> for ErrorBody<'a> {
    fn from(err: &'a AppError) -> Self {
        Self {
            code: err.code(),
            description: err.description(),
            layer: err.layer(),
            level: err.level(),
            http_status: err.http_status(),
            messages: err.messages(),
            raw: err.raw().map(ToString::to_string),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.level() {
            ErrorLevel::Info => {
                tracing::info!(code = %self.code(), function = %self.function(), "Request failed");
            }
            ErrorLevel::Warning => {
                tracing::warn!(
                    code = %self.code(),
                    function = %self.function(),
                    "Request rejected"
                );
            }
            ErrorLevel::Error => {
                tracing::error!(
                    code = %self.code(),
                    function = %self.function(),
                    layer = ?self.layer(),
                    error = %self,
                    "Request failed"
                );
            }
            ErrorLevel::Fatal => {
                tracing::error!(
                    code = %self.code(),
                    function = %self.function(),
                    layer = ?self.layer(),
                    error = %self,
                    fatal = true,
                    "Request failed with a fatal error"
                );
            }
        }

        let status = self.status_code();
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::{ErrorTemplate, UNKNOWN};
    use axum::http::StatusCode;

    const GADGET_ALREADY_EXIST: ErrorTemplate = ErrorTemplate::new(
        ErrorLayer::UseCase,
        "ERR_GADGET_ALREADY_EXIST",
        "Gadget already exists",
        409,
    );

    #[derive(Debug, thiserror::Error)]
    #[error("duplicate key value")]
    struct Duplicate;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_renders_status_and_structured_body() {
        let err = GADGET_ALREADY_EXIST
            .to_error()
            .with_function("CreateGadget")
            .push_message("code: taken");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["code"], "ERR_GADGET_ALREADY_EXIST");
        assert_eq!(body["description"], "Gadget already exists");
        assert_eq!(body["layer"], "use_case");
        assert_eq!(body["level"], "error");
        assert_eq!(body["http_status"], 409);
        assert_eq!(body["messages"][0], "code: taken");
        assert!(body["raw"].is_null());
    }

    #[tokio::test]
    async fn test_renders_raw_cause() {
        let err = UNKNOWN.to_error().with_raw(Duplicate);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["layer"], "infrastructure");
        assert_eq!(body["raw"], "duplicate key value");
    }
}
