use thiserror::Error;

use crate::cache::CacheError;
use crate::query::QueryError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type BenchResult<T> = Result<T, BenchError>;
