//! PostgreSQL Validation Implementation

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::gateways::{ExistenceCheckSpec, Validation};
use crate::infrastructure::driven_adapters::catalog_repository::push_value;
use crate::infrastructure::driven_adapters::database::database_error;
use crate::shared::errors::AppError;

/// Existence queries against any catalog table
pub struct PostgresValidation {
    pool: PgPool,
}

impl PostgresValidation {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, spec: &ExistenceCheckSpec, function: &str) -> Result<bool, AppError> {
        let exists = exists_query(spec)
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(spec.table, function, e))?;

        tracing::debug!(
            table = spec.table,
            column = spec.id_column,
            exists,
            "Existence check"
        );
        Ok(exists)
    }
}

#[async_trait]
impl Validation for PostgresValidation {
    async fn validate_existence(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError> {
        self.exists(spec, "Validation.ValidateExistence").await
    }

    async fn record_exists(&self, spec: &ExistenceCheckSpec) -> Result<bool, AppError> {
        self.exists(spec, "Validation.RecordExists").await
    }
}

fn exists_query(spec: &ExistenceCheckSpec) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ",
        spec.table, spec.id_column
    ));
    push_value(&mut builder, spec.id_value.clone());

    if let Some(column) = spec.deleted_column {
        builder.push(format_args!(" AND {column} IS NULL"));
    }

    if let Some(exclude) = &spec.exclude {
        builder.push(format_args!(" AND {} <> ", exclude.column));
        builder.push_bind(*exclude.id.as_uuid());
    }

    builder.push(")");
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Merchant, RecordId};

    #[test]
    fn test_unique_value_query() {
        let spec = ExistenceCheckSpec::new("merchants", "document", "20123456789");

        assert_eq!(
            exists_query(&spec).sql(),
            "SELECT EXISTS(SELECT 1 FROM merchants WHERE document = $1)"
        );
    }

    #[test]
    fn test_live_record_query() {
        let spec =
            ExistenceCheckSpec::record::<Merchant>(RecordId::new()).not_deleted("deleted_at");

        assert_eq!(
            exists_query(&spec).sql(),
            "SELECT EXISTS(SELECT 1 FROM merchants WHERE id = $1 AND deleted_at IS NULL)"
        );
    }

    #[test]
    fn test_update_excludes_own_row() {
        let spec = ExistenceCheckSpec::new("stores", "code", "ST-001")
            .excluding("id", RecordId::new());

        assert_eq!(
            exists_query(&spec).sql(),
            "SELECT EXISTS(SELECT 1 FROM stores WHERE code = $1 AND id <> $2)"
        );
    }
}
