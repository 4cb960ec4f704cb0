//! Seed table for the simple workload.

pub mod error;
pub mod seed;


pub use error::{SetupError, SetupResult};
pub use seed::{SampleUser, SetupReport, ensure_seed_table, seed_insert_sql, sql_literal};
