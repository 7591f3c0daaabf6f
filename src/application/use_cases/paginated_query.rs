//! Concurrent Paginated Query
//!
//! Fetches a page of rows and the total count at the same time under one
//! shared deadline.

use std::future::Future;

use crate::shared::context::RequestContext;
use crate::shared::errors::AppError;
use crate::shared::panic_guard::PanicGuard;

pub struct ConcurrentPaginatedQuery;

impl ConcurrentPaginatedQuery {
    /// Run both fetches concurrently and wait for both.
    ///
    /// A rows failure wins over a total failure; neither produces a partial
    /// result. If `ctx` expires first, both fetches are dropped together.
    ///
    /// # Errors
    ///
    /// Returns the rows error, else the total error, else `DEADLINE_EXCEEDED`.
    pub async fn run<T, R, C>(
        ctx: &RequestContext,
        fetch_rows: R,
        fetch_total: C,
    ) -> Result<(Vec<T>, i64), AppError>
    where
        R: Future<Output = Result<Vec<T>, AppError>>,
        C: Future<Output = Result<i64, AppError>>,
    {
        let (rows, total) = ctx
            .run(async {
                Ok(tokio::join!(
                    PanicGuard::run(fetch_rows),
                    PanicGuard::run(fetch_total)
                ))
            })
            .await?;

        let rows = rows?;
        let total = total?;
        Ok((rows, total))
    }
}
