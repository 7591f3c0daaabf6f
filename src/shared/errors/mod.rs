//! Error Types
//!
//! A single structured error value that travels unchanged from the repository
//! to the HTTP response, plus the read-only templates it is stamped from.

mod response;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;

pub use response::ErrorBody;

/// Code carried by errors that were never classified
pub const UNKNOWN_CODE: &str = "ERR_UNKNOWN";

const UNKNOWN_DESCRIPTION: &str = "An unexpected error occurred";

/// Architectural layer that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLayer {
    Domain,
    Infrastructure,
    Interface,
    UseCase,
}

/// Error severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorLevel {
    Info,
    Warning,
    Error,
    Fatal,
}

/// Immutable description of a known failure mode.
///
/// Templates are `const` values; the only way to obtain something mutable
/// from one is [`ErrorTemplate::to_error`], which hands out a fresh
/// [`AppError`] per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorTemplate {
    layer: ErrorLayer,
    level: ErrorLevel,
    code: &'static str,
    description: &'static str,
    http_status: u16,
}

impl ErrorTemplate {
    #[must_use]
    pub const fn new(
        layer: ErrorLayer,
        code: &'static str,
        description: &'static str,
        http_status: u16,
    ) -> Self {
        Self {
            layer,
            level: ErrorLevel::Error,
            code,
            description,
            http_status,
        }
    }

    #[must_use]
    pub const fn with_level(self, level: ErrorLevel) -> Self {
        Self { level, ..self }
    }

    #[must_use]
    pub const fn layer(&self) -> ErrorLayer {
        self.layer
    }

    #[must_use]
    pub const fn level(&self) -> ErrorLevel {
        self.level
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Stamp a new error from this template
    #[must_use]
    pub fn to_error(&self) -> AppError {
        AppError::new(self.layer).copy_code_description(self)
    }

    /// Whether `err` is of the kind this template describes
    #[must_use]
    pub fn matches(&self, err: &AppError) -> bool {
        err.code == self.code
    }
}

/// Unclassified failure (store errors, recovered panics)
pub const UNKNOWN: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Infrastructure,
    UNKNOWN_CODE,
    UNKNOWN_DESCRIPTION,
    500,
);

/// The request deadline elapsed before the operation finished
pub const DEADLINE_EXCEEDED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Infrastructure,
    "ERR_DEADLINE_EXCEEDED",
    "The operation did not finish before the request deadline",
    504,
);

/// The store rejected a write because of a unique constraint.
///
/// Repositories put the offending column, when known, in `messages`.
pub const DUPLICATE_KEY: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Infrastructure,
    "ERR_DUPLICATE_KEY",
    "A record with the same unique value already exists",
    409,
);

/// A write matched no live row
pub const RECORD_NOT_FOUND: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Infrastructure,
    "ERR_RECORD_NOT_FOUND",
    "The record does not exist",
    404,
);

pub const INVALID_PAYLOAD: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Interface,
    "ERR_INVALID_PAYLOAD",
    "The request payload is invalid",
    400,
)
.with_level(ErrorLevel::Warning);

pub const INVALID_ID: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Interface,
    "ERR_INVALID_ID",
    "The identifier is not a valid UUID",
    400,
)
.with_level(ErrorLevel::Warning);

pub const UNAUTHORIZED: ErrorTemplate = ErrorTemplate::new(
    ErrorLayer::Interface,
    "ERR_UNAUTHORIZED",
    "Missing or invalid credentials",
    401,
)
.with_level(ErrorLevel::Warning);

type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Structured error carrying its taxonomy from origin to HTTP boundary
#[derive(Debug, Clone)]
pub struct AppError {
    code: String,
    description: String,
    layer: ErrorLayer,
    level: ErrorLevel,
    http_status: u16,
    function: String,
    messages: Vec<String>,
    cause: Option<Cause>,
}

impl AppError {
    /// Create an unclassified error scoped to `layer`
    #[must_use]
    pub fn new(layer: ErrorLayer) -> Self {
        Self {
            code: UNKNOWN_CODE.to_string(),
            description: UNKNOWN_DESCRIPTION.to_string(),
            layer,
            level: ErrorLevel::Error,
            http_status: 500,
            function: String::new(),
            messages: Vec::new(),
            cause: None,
        }
    }

    #[must_use]
    pub fn domain() -> Self {
        Self::new(ErrorLayer::Domain)
    }

    #[must_use]
    pub fn infrastructure() -> Self {
        Self::new(ErrorLayer::Infrastructure)
    }

    #[must_use]
    pub fn interface() -> Self {
        Self::new(ErrorLayer::Interface)
    }

    #[must_use]
    pub fn use_case() -> Self {
        Self::new(ErrorLayer::UseCase)
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: ErrorLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_http_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }

    /// Record the operation that raised or last annotated this error
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn push_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Wrap the underlying raw error
    #[must_use]
    pub fn with_raw<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Take code, description, status and level from `template`, keeping this
    /// error's layer, function, messages and cause.
    #[must_use]
    pub fn copy_code_description(mut self, template: &ErrorTemplate) -> Self {
        self.code = template.code.to_string();
        self.description = template.description.to_string();
        self.http_status = template.http_status;
        self.level = template.level;
        self
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn layer(&self) -> ErrorLayer {
        self.layer
    }

    #[must_use]
    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn raw(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Recover the concrete type of the wrapped cause
    #[must_use]
    pub fn downcast_raw<T: StdError + 'static>(&self) -> Option<&T> {
        self.cause.as_deref().and_then(|cause| cause.downcast_ref::<T>())
    }

    /// An empty code counts as unknown too
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.code.is_empty() || self.code == UNKNOWN_CODE
    }

    /// Two errors are the same kind iff their codes match
    #[must_use]
    pub fn is_same_kind(&self, other: &AppError) -> bool {
        self.code == other.code
    }

    /// HTTP status as a typed value; out-of-range codes degrade to 500
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)?;
        if let Some(cause) = &self.cause {
            write!(f, " ({cause})")?;
        }
        Ok(())
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        INVALID_ID.to_error().with_raw(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        INVALID_PAYLOAD.to_error().with_messages(messages)
    }
}
