//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A boolean variable was not one of the accepted spellings.
    #[error("invalid boolean for {name}: '{value}' (expected true/false/1/0)")]
    InvalidBool { name: &'static str, value: String },

    /// Unknown `DSQL_SSL_MODE`.
    #[error("invalid ssl mode '{value}': expected disable, prefer or require")]
    InvalidSslMode { value: String },

    /// Unknown `DSQL_TOKEN_SOURCE`.
    #[error("invalid token source '{value}': expected aws-cli or static")]
    InvalidTokenSource { value: String },

    /// A required environment variable was not set.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },

    /// Pool lower bound above the upper bound.
    #[error("pool minimum ({min}) exceeds pool maximum ({max})")]
    PoolBounds { min: usize, max: usize },

    #[error("pool maximum must be at least 1")]
    ZeroPoolSize,

    #[error("cache TTL must be at least 1 second")]
    ZeroTtl,

    /// `DSQL_TOKEN_SOURCE=static` without `DSQL_PASSWORD`.
    #[error("static token source requires DSQL_PASSWORD")]
    MissingStaticPassword,
}
