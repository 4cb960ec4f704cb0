//! Cold query versus cached reads.
//!
//! [`run_with`] deletes the cache entry for a query, runs it once against the
//! database and hydrates the cache, then reads it back
//! [`BenchSettings::cache_hits`] times, timing every step.

pub mod error;
pub mod report;
pub mod runner;
pub mod stats;
pub mod workload;


pub use error::{BenchError, BenchResult};
pub use report::{BenchSummary, format_secs};
pub use runner::{
    BenchEvent, BenchReport, BenchSettings, Iteration, IterationKind, run, run_with,
};
pub use stats::{improvement, speedup};
pub use workload::Workload;
