use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by cache operations.
pub enum CacheError {
    /// Could not open or verify the Valkey connection.
    #[error("failed to connect to Valkey at '{endpoint}': {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: redis::RedisError,
    },

    /// A command failed after the connection was established.
    #[error("Valkey {op} failed for key '{key}': {source}")]
    Command {
        op: &'static str,
        key: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("failed to encode cache envelope: {0}")]
    Encode(#[from] serde_json::Error),

    /// Raised by in-memory caches.
    #[error("cache unavailable: {message}")]
    Unavailable { message: String },
}

pub type CacheResult<T> = Result<T, CacheError>;
