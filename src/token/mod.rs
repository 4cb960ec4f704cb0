//! Ephemeral database credentials.
//!
//! DSQL passwords are IAM tokens that expire, so one is generated per physical
//! connection rather than once per process.

pub mod error;
pub mod factory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;


pub use error::{TokenError, TokenResult};
pub use factory::build_token_provider;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTokenProvider;
pub use provider::{AuthToken, AwsCliTokenProvider, StaticTokenProvider, TokenProvider};
