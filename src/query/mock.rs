use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::RwLock;

use super::backend::{QueryBackend, QueryOutcome};
use super::error::{QueryError, QueryResult};
use super::render::render_rows;

/// In-memory backend with canned result sets and a simulated latency.
pub struct MockQueryBackend {
    tables: RwLock<HashMap<String, Vec<Vec<Option<String>>>>>,
    latency: Duration,
    calls: AtomicUsize,
}

impl Default for MockQueryBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(20))
    }
}

impl MockQueryBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            latency,
            calls: AtomicUsize::new(0),
        }
    }

    /// Registers the rows returned for `sql`.
    pub fn with_result(self, sql: &str, rows: Vec<Vec<Option<String>>>) -> Self {
        self.tables.write().insert(sql.to_string(), rows);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QueryBackend for MockQueryBackend {
    async fn execute(&self, sql: &str) -> QueryResult<QueryOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let rows = self
            .tables
            .read()
            .get(sql)
            .cloned()
            .ok_or_else(|| QueryError::Unavailable {
                message: format!("no canned result for query: {sql}"),
            })?;

        tokio::time::sleep(self.latency).await;

        Ok(QueryOutcome {
            elapsed: self.latency,
            row_count: rows.len(),
            rendered: render_rows(&rows),
        })
    }
}
