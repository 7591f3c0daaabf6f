//! Database Connection Management
//!
//! Pool creation plus the mapping from driver errors to `AppError`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;
use crate::shared::errors::{AppError, DUPLICATE_KEY, UNKNOWN};

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns the driver error when the first connection cannot be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Classify a driver error raised by `function` against `table`.
///
/// Unique violations become `DUPLICATE_KEY` with the offending column in
/// `messages`; everything else is `UNKNOWN`.
pub(crate) fn database_error(table: &str, function: &str, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let column = db
                .constraint()
                .and_then(|constraint| unique_column(table, constraint))
                .map(str::to_string);
            tracing::warn!(table, function, column = ?column, "Unique constraint violated");

            return DUPLICATE_KEY
                .to_error()
                .with_function(function)
                .with_messages(column.into_iter().collect())
                .with_raw(err);
        }
    }

    tracing::error!(table, function, error = %err, "Database error");
    UNKNOWN.to_error().with_function(function).with_raw(err)
}

/// `merchants_document_key` on `merchants` -> `document`
fn unique_column<'a>(table: &str, constraint: &'a str) -> Option<&'a str> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_key")
        .filter(|column| !column.is_empty())
}
