use std::time::{Duration, Instant};

use super::error::{QueryError, QueryResult};
use super::render::{collect_rows, render_rows};
use crate::pool::DsqlPool;

/// A timed query result in its cacheable form.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// Wall time of execute + fetch, excluding checkout.
    pub elapsed: Duration,
    pub row_count: usize,
    /// See [`render_rows`].
    pub rendered: String,
}

/// The slow path: something that can run SQL and time it.
pub trait QueryBackend: Send + Sync {
    fn execute(
        &self,
        sql: &str,
    ) -> impl std::future::Future<Output = QueryResult<QueryOutcome>> + Send;
}

impl QueryBackend for DsqlPool {
    async fn execute(&self, sql: &str) -> QueryResult<QueryOutcome> {
        let conn = self.get().await?;
        tracing::info!(host = %self.target().host, "using pooled connection to DSQL cluster");
        tracing::info!(query = sql, "executing query in DSQL");

        let start = Instant::now();
        let messages = conn
            .simple_query(sql)
            .await
            .map_err(|e| QueryError::Execute { source: e })
            .inspect_err(|e| tracing::error!(error = %e, "DSQL query failed"))?;
        let elapsed = start.elapsed();

        let rows = collect_rows(messages);
        let row_count = rows.len();
        tracing::info!(elapsed = ?elapsed, rows = row_count, "DSQL query complete");

        Ok(QueryOutcome {
            elapsed,
            row_count,
            rendered: render_rows(&rows),
        })
    }
}
