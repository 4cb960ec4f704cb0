use std::time::Duration;

use serde::{Deserialize, Serialize};

/// JSON value stored under the query-text key.
///
/// Field names are part of the stored format; other readers of the same cache
/// expect exactly `result` and `dsql_time_seconds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    /// Stringified result set.
    pub result: String,
    /// Duration of the query that produced `result`, in fractional seconds.
    pub dsql_time_seconds: f64,
}

impl CacheEnvelope {
    pub fn new(result: impl Into<String>, dsql_time: Duration) -> Self {
        Self {
            result: result.into(),
            dsql_time_seconds: dsql_time.as_secs_f64(),
        }
    }

    /// Returns the stored query duration; negative or non-finite values read as zero.
    pub fn dsql_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.dsql_time_seconds).unwrap_or(Duration::ZERO)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
