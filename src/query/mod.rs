//! Timed query execution against the database (the uncached path).

pub mod backend;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod render;


pub use backend::{QueryBackend, QueryOutcome};
pub use error::{QueryError, QueryResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockQueryBackend;
pub use render::{NULL_TEXT, collect_rows, render_rows};
