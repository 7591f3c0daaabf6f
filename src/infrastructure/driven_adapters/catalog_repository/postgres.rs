//! PostgreSQL Catalog Repository Implementation
//!
//! One generic repository serves every catalog table. Each entity describes
//! its columns through [`PgCatalogEntity`]; queries are assembled with
//! `QueryBuilder` so every value is bound, never interpolated.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::gateways::CatalogRepository;
use crate::domain::models::{CatalogEntity, FieldValue, FilterClause, MatchMode, RecordId};
use crate::infrastructure::driven_adapters::database::database_error;
use crate::shared::errors::{AppError, RECORD_NOT_FOUND};
use crate::shared::pagination::PaginationParams;

/// Storage mapping for a catalog entity
pub trait PgCatalogEntity: CatalogEntity {
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// Columns read back into `Row`
    const SELECT_COLUMNS: &'static str;
    const ORDER_BY: &'static str = "created_at DESC, id";

    fn from_row(row: Self::Row) -> Self;

    /// Writable columns and their values, in insert order
    fn column_values(data: &Self::Data) -> Vec<(&'static str, FieldValue)>;
}

/// PostgreSQL implementation of `CatalogRepository`
pub struct PostgresCatalogRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgCatalogEntity> PostgresCatalogRepository<E> {
    /// Create a new PostgresCatalogRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn function(operation: &str) -> String {
        format!("{}Repository.{operation}", E::SINGULAR)
    }
}

#[async_trait]
impl<E: PgCatalogEntity> CatalogRepository<E> for PostgresCatalogRepository<E> {
    async fn list(
        &self,
        filters: &E::Filters,
        pagination: &PaginationParams,
    ) -> Result<Vec<E>, AppError> {
        let mut builder = select_query::<E>(&E::filter_clauses(filters));
        builder.push(format_args!(" ORDER BY {} LIMIT ", E::ORDER_BY));
        builder.push_bind(i64::from(pagination.size_page()));
        builder.push(" OFFSET ");
        builder.push_bind(pagination.offset());

        let rows = builder
            .build_query_as::<E::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &Self::function("List"), e))?;

        Ok(rows.into_iter().map(E::from_row).collect())
    }

    async fn count(&self, filters: &E::Filters) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT COUNT(*) FROM {} WHERE {} IS NULL",
            E::TABLE,
            E::STATUS_COLUMN
        ));
        push_filters(&mut builder, &E::filter_clauses(filters));

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &Self::function("Count"), e))
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<E>, AppError> {
        let mut builder = select_query::<E>(&[]);
        builder.push(format_args!(" AND {} = ", E::ID_COLUMN));
        builder.push_bind(*id.as_uuid());

        let row = builder
            .build_query_as::<E::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &Self::function("FindById"), e))?;

        Ok(row.map(E::from_row))
    }

    async fn create(&self, id: &RecordId, data: &E::Data) -> Result<RecordId, AppError> {
        let values = E::column_values(data);
        let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();

        let mut builder = QueryBuilder::new(format!(
            "INSERT INTO {} ({}, {}, created_at, updated_at) VALUES (",
            E::TABLE,
            E::ID_COLUMN,
            columns.join(", ")
        ));
        builder.push_bind(*id.as_uuid());
        for (_, value) in values {
            builder.push(", ");
            push_value(&mut builder, value);
        }
        builder.push(format_args!(", NOW(), NOW()) RETURNING {}", E::ID_COLUMN));

        let created = builder
            .build_query_scalar::<Uuid>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &Self::function("Create"), e))?;

        Ok(RecordId::from_uuid(created))
    }

    async fn update(&self, id: &RecordId, data: &E::Data) -> Result<(), AppError> {
        let function = Self::function("Update");

        let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", E::TABLE));
        for (column, value) in E::column_values(data) {
            builder.push(format_args!("{column} = "));
            push_value(&mut builder, value);
            builder.push(", ");
        }
        builder.push(format_args!("updated_at = NOW() WHERE {} = ", E::ID_COLUMN));
        builder.push_bind(*id.as_uuid());
        builder.push(format_args!(" AND {} IS NULL", E::STATUS_COLUMN));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &function, e))?;

        if result.rows_affected() == 0 {
            return Err(RECORD_NOT_FOUND.to_error().with_function(function));
        }
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "UPDATE {table} SET {status} = NOW(), updated_at = NOW() WHERE {id} = ",
            table = E::TABLE,
            status = E::STATUS_COLUMN,
            id = E::ID_COLUMN
        ));
        builder.push_bind(*id.as_uuid());
        builder.push(format_args!(" AND {} IS NULL", E::STATUS_COLUMN));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(E::TABLE, &Self::function("Delete"), e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// `SELECT <columns> FROM <table> WHERE <not deleted> [AND <filters>]`
fn select_query<E: PgCatalogEntity>(clauses: &[FilterClause]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE {} IS NULL",
        E::SELECT_COLUMNS,
        E::TABLE,
        E::STATUS_COLUMN
    ));
    push_filters(&mut builder, clauses);
    builder
}

fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, clauses: &[FilterClause]) {
    for clause in clauses {
        match clause.mode {
            MatchMode::Exact => {
                builder.push(format_args!(" AND {} = ", clause.column));
                push_value(builder, clause.value.clone());
            }
            MatchMode::Contains => {
                builder.push(format_args!(" AND {} ILIKE ", clause.column));
                builder.push_bind(format!("%{}%", escape_like(&clause.value.to_string())));
            }
        }
    }
}

pub(crate) fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Uuid(value) => builder.push_bind(value),
        FieldValue::Text(value) => builder.push_bind(value),
        FieldValue::OptionalText(value) => builder.push_bind(value),
        FieldValue::Integer(value) => builder.push_bind(value),
    };
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Merchant, MerchantFilters, Store, StoreFilters};

    #[test]
    fn test_select_excludes_soft_deleted_rows() {
        let clauses = Merchant::filter_clauses(&MerchantFilters::default());
        let builder = select_query::<Merchant>(&clauses);

        assert_eq!(
            builder.sql(),
            "SELECT id, name, document, address, phone, email, created_at, updated_at \
             FROM merchants WHERE deleted_at IS NULL"
        );
    }

    #[test]
    fn test_filters_are_bound_in_order() {
        let filters = StoreFilters {
            merchant_id: Some(Uuid::new_v4()),
            name: Some("north".to_string()),
        };

        let builder = select_query::<Store>(&Store::filter_clauses(&filters));

        assert!(builder
            .sql()
            .ends_with("WHERE deleted_at IS NULL AND merchant_id = $1 AND name ILIKE $2"));
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }
}
