use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::{TokenError, TokenResult};
use super::provider::{AuthToken, TokenProvider};

/// Issues `token-1`, `token-2`, ... so tests can tell connections apart.
#[derive(Default)]
pub struct MockTokenProvider {
    issued: AtomicUsize,
    fail: bool,
}

impl MockTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails.
    pub fn failing() -> Self {
        Self {
            issued: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn generate(&self, _host: &str, _region: &str) -> TokenResult<AuthToken> {
        if self.fail {
            return Err(TokenError::CommandFailed {
                stderr: "mock failure".to_string(),
            });
        }
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AuthToken::new(format!("token-{n}")))
    }
}
