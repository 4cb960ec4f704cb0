use thiserror::Error;

use crate::pool::PoolError;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("failed to {step}: {source}")]
    Statement {
        step: &'static str,
        #[source]
        source: tokio_postgres::Error,
    },
}

pub type SetupResult<T> = Result<T, SetupError>;
