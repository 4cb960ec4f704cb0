//! DSQL cache benchmark library crate (used by the binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Environment-backed settings
//! - [`DsqlPool`], [`PoolSettings`], [`ConnectionTarget`] - Token-refreshing connection pool
//! - [`TokenProvider`], [`AwsCliTokenProvider`] - DSQL auth token generation
//!
//! ## Slow and Fast Paths
//! - [`QueryBackend`], [`QueryOutcome`] - Timed query execution
//! - [`ResultCache`], [`ValkeyCache`], [`CacheEnvelope`] - Cached results with TTL
//! - [`hydrate`], [`lookup`] - Cache write and timed read
//!
//! ## Benchmark
//! - [`Workload`], [`BenchSettings`], [`run_with`] - The miss-then-hits run
//! - [`BenchReport`], [`BenchSummary`] - Timings and derived metrics
//! - [`ensure_seed_table`] - `users1` setup for the simple workload
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod bench;
pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod pool;
pub mod prompt;
pub mod query;
pub mod setup;
pub mod token;

pub use bench::{
    BenchError, BenchEvent, BenchReport, BenchResult, BenchSettings, BenchSummary, Iteration,
    IterationKind, Workload, run, run_with,
};
pub use cache::{
    CacheEnvelope, CacheError, CacheLookup, CacheResult, ResultCache, ValkeyCache, hydrate, lookup,
};
#[cfg(any(test, feature = "mock"))]
pub use cache::MockResultCache;
pub use cli::{Cli, CliError, Invocation, InvocationSource};
pub use config::{Config, ConfigError, SslMode, TokenSource};
pub use pool::{ConnectionTarget, DsqlConnection, DsqlPool, PoolError, PoolSettings, PoolStatus};
pub use query::{QueryBackend, QueryError, QueryOutcome};
#[cfg(any(test, feature = "mock"))]
pub use query::MockQueryBackend;
pub use setup::{SetupError, SetupReport, ensure_seed_table};
pub use token::{AuthToken, AwsCliTokenProvider, StaticTokenProvider, TokenError, TokenProvider};
#[cfg(any(test, feature = "mock"))]
pub use token::MockTokenProvider;
