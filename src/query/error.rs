use thiserror::Error;

use crate::pool::PoolError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("query failed: {source}")]
    Execute {
        #[source]
        source: tokio_postgres::Error,
    },

    /// Raised by in-memory backends.
    #[error("query backend unavailable: {message}")]
    Unavailable { message: String },
}

pub type QueryResult<T> = Result<T, QueryError>;
