//! Panic Guard
//!
//! Last-resort boundary that turns a panic anywhere beneath a use-case call
//! into a structured, fatal `ERR_UNKNOWN`. Regular failures travel as
//! `Result`s; this only catches defects.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::shared::errors::{AppError, ErrorLevel, UNKNOWN};

/// Panic payload rendered as an error so it can sit in an [`AppError`] cause
#[derive(Debug, thiserror::Error)]
#[error("panic: {0}")]
pub struct PanicError(pub String);

pub struct PanicGuard;

impl PanicGuard {
    /// Drive `operation` to completion, converting a panic into an error.
    ///
    /// Install this outside any deadline so a panic raised while the
    /// deadline is being set up is still caught.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or a fatal Infrastructure-layer
    /// `ERR_UNKNOWN` if it panicked.
    pub async fn run<T, F>(operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match AssertUnwindSafe(operation).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(Self::recover(payload.as_ref())),
        }
    }

    /// Build the structured error for a caught panic payload
    #[must_use]
    pub fn recover(payload: &(dyn Any + Send)) -> AppError {
        let message = panic_message(payload);
        tracing::error!(panic = %message, "Recovered from panic");

        UNKNOWN
            .to_error()
            .with_level(ErrorLevel::Fatal)
            .with_raw(PanicError(message))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::{ErrorLayer, ErrorTemplate};

    const BROKEN: ErrorTemplate =
        ErrorTemplate::new(ErrorLayer::Domain, "ERR_BROKEN", "broken", 422);

    async fn dereference_nothing() -> Result<(), AppError> {
        panic!("nil dereference")
    }

    async fn index_after_await() -> Result<(), AppError> {
        tokio::task::yield_now().await;
        let index = 3;
        panic!("index {index} out of bounds")
    }

    #[tokio::test]
    async fn test_passes_through_ok() {
        let result = PanicGuard::run(async { Ok::<_, AppError>("fine") }).await;
        assert_eq!(result.unwrap(), "fine");
    }

    #[tokio::test]
    async fn test_passes_through_existing_error() {
        let result = PanicGuard::run(async { Err::<(), _>(BROKEN.to_error()) }).await;
        let err = result.unwrap_err();
        assert!(BROKEN.matches(&err));
        assert_eq!(err.level(), ErrorLevel::Error);
    }

    #[tokio::test]
    async fn test_converts_str_panic() {
        let result = PanicGuard::run(dereference_nothing()).await;

        let err = result.unwrap_err();
        assert_eq!(err.layer(), ErrorLayer::Infrastructure);
        assert_eq!(err.level(), ErrorLevel::Fatal);
        assert!(err.is_unknown());
        assert_eq!(err.http_status(), 500);
        assert_eq!(
            err.downcast_raw::<PanicError>().unwrap().0,
            "nil dereference"
        );
    }

    #[tokio::test]
    async fn test_converts_formatted_panic_after_await() {
        let result = PanicGuard::run(index_after_await()).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERR_UNKNOWN: An unexpected error occurred (panic: index 3 out of bounds)"
        );
    }

    #[test]
    fn test_non_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let err = PanicGuard::recover(payload.as_ref());
        assert_eq!(
            err.downcast_raw::<PanicError>().unwrap().0,
            "unknown panic payload"
        );
    }
}
