use std::sync::Arc;

use super::provider::{AwsCliTokenProvider, StaticTokenProvider, TokenProvider};
use crate::config::{Config, TokenSource};

/// Builds the appropriate [`TokenProvider`] implementation for the config.
///
/// Call [`Config::validate`] first; a static source without a password falls
/// back to an empty password here.
pub fn build_token_provider(config: &Config) -> Arc<dyn TokenProvider> {
    match config.token_source {
        TokenSource::AwsCli => Arc::new(AwsCliTokenProvider::new(
            config.is_admin_user(),
            config.token_expires_in,
        )),
        TokenSource::Static => Arc::new(StaticTokenProvider::new(
            config.static_password.clone().unwrap_or_default(),
        )),
    }
}
