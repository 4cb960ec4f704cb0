//! Token providers used when opening a physical DSQL connection.
//!
//! `AwsCliTokenProvider` shells out to `aws dsql generate-db-connect-*-auth-token`.
//! `StaticTokenProvider` hands back a fixed password.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::error::{TokenError, TokenResult};

const CMD_TIMEOUT: Duration = Duration::from_secs(30);
const CMD_RETRIES: usize = 3;
const CMD_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// A short-lived database password.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<redacted, {} bytes>)", self.0.len())
    }
}

#[async_trait]
/// Produces a password for one new physical connection.
pub trait TokenProvider: Send + Sync {
    /// Generates a token valid for `host` in `region`.
    async fn generate(&self, host: &str, region: &str) -> TokenResult<AuthToken>;
}

/// Mints IAM auth tokens through the AWS CLI.
pub struct AwsCliTokenProvider {
    aws_path: PathBuf,
    admin: bool,
    expires_in: Duration,
}

impl AwsCliTokenProvider {
    /// Uses `aws` from `PATH`.
    pub fn new(admin: bool, expires_in: Duration) -> Self {
        Self::with_program("aws", admin, expires_in)
    }

    /// Uses an explicit CLI executable.
    pub fn with_program(program: impl Into<PathBuf>, admin: bool, expires_in: Duration) -> Self {
        Self {
            aws_path: program.into(),
            admin,
            expires_in,
        }
    }

    fn subcommand(&self) -> &'static str {
        if self.admin {
            "generate-db-connect-admin-auth-token"
        } else {
            "generate-db-connect-auth-token"
        }
    }

    fn args(&self, host: &str, region: &str) -> Vec<String> {
        vec![
            "dsql".to_string(),
            self.subcommand().to_string(),
            "--hostname".to_string(),
            host.to_string(),
            "--region".to_string(),
            region.to_string(),
            "--expires-in".to_string(),
            self.expires_in.as_secs().to_string(),
        ]
    }

    async fn run_command_with_retries(&self, program: &Path, args: Vec<String>) -> TokenResult<String> {
        let mut attempt = 0usize;
        loop {
            attempt += 1;

            let mut cmd = Command::new(program);
            cmd.args(&args)
                .kill_on_drop(true)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());

            let child = cmd.spawn().map_err(|e| TokenError::Spawn {
                program: program.display().to_string(),
                source: e,
            })?;

            let output = match tokio::time::timeout(CMD_TIMEOUT, child.wait_with_output()).await {
                Ok(res) => res.map_err(|e| TokenError::Spawn {
                    program: program.display().to_string(),
                    source: e,
                })?,
                Err(_) => return Err(TokenError::Timeout { timeout: CMD_TIMEOUT }),
            };

            if output.status.success() {
                return String::from_utf8(output.stdout).map_err(|_| TokenError::InvalidUtf8);
            }

            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if attempt >= CMD_RETRIES {
                return Err(TokenError::CommandFailed { stderr });
            }

            tracing::warn!(attempt, stderr = %stderr, "auth token command failed, retrying");
            tokio::time::sleep(CMD_RETRY_BACKOFF).await;
        }
    }
}

#[async_trait]
impl TokenProvider for AwsCliTokenProvider {
    async fn generate(&self, host: &str, region: &str) -> TokenResult<AuthToken> {
        let stdout = self
            .run_command_with_retries(&self.aws_path, self.args(host, region))
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to generate auth token"))?;

        let token = stdout.trim();
        if token.is_empty() {
            return Err(TokenError::EmptyToken);
        }

        tracing::info!(host, region, "generated fresh auth token");
        Ok(AuthToken::new(token))
    }
}

/// Returns the same password for every connection.
pub struct StaticTokenProvider {
    token: AuthToken,
}

impl StaticTokenProvider {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            token: AuthToken::new(password),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn generate(&self, _host: &str, _region: &str) -> TokenResult<AuthToken> {
        tracing::debug!("using static database password");
        Ok(self.token.clone())
    }
}
