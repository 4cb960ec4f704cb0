use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("token generation timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("token generation failed: {stderr}")]
    CommandFailed { stderr: String },

    #[error("token generator returned an empty token")]
    EmptyToken,

    #[error("token generator output was not valid UTF-8")]
    InvalidUtf8,
}

pub type TokenResult<T> = Result<T, TokenError>;
