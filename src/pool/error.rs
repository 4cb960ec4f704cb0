use deadpool::managed;
use thiserror::Error;

use crate::token::TokenError;

#[derive(Debug, Error)]
/// Errors from opening, validating or checking out pooled connections.
pub enum PoolError {
    /// Could not obtain a password for a new connection.
    #[error("failed to obtain auth token: {0}")]
    Token(#[from] TokenError),

    /// The database refused or dropped the connection attempt.
    #[error("failed to connect to '{host}': {source}")]
    Connect {
        host: String,
        #[source]
        source: tokio_postgres::Error,
    },

    /// A pooled connection failed its liveness check.
    #[error("pooled connection is stale: {reason}")]
    Stale { reason: String },

    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("failed to build connection pool: {message}")]
    Build { message: String },

    /// Waiting for, creating or recycling a connection took too long.
    #[error("connection pool timed out ({kind})")]
    Timeout { kind: String },

    #[error("connection pool is closed")]
    Closed,

    #[error("connection checkout failed: {message}")]
    Checkout { message: String },
}

impl From<managed::PoolError<PoolError>> for PoolError {
    fn from(err: managed::PoolError<PoolError>) -> Self {
        match err {
            managed::PoolError::Backend(e) => e,
            managed::PoolError::Timeout(kind) => PoolError::Timeout {
                kind: format!("{kind:?}").to_lowercase(),
            },
            managed::PoolError::Closed => PoolError::Closed,
            other => PoolError::Checkout {
                message: other.to_string(),
            },
        }
    }
}

pub type PoolResult<T> = Result<T, PoolError>;
