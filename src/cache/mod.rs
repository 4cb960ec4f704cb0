//! Valkey result cache: the fast path.
//!
//! Entries are keyed by the literal SQL text and hold a JSON
//! [`CacheEnvelope`]. Expiry is left entirely to the server's TTL.

pub mod client;
pub mod envelope;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod ops;
pub mod types;


pub use client::{ResultCache, ValkeyCache};
pub use envelope::CacheEnvelope;
pub use error::{CacheError, CacheResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockResultCache;
pub use ops::{hydrate, lookup};
pub use types::CacheLookup;
