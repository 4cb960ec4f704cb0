//! Environment-backed configuration.
//!
//! Most settings have defaults. Endpoints normally come from the command line;
//! see [`crate::cli`] for how positional arguments and the environment combine.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Default DSQL database name.
pub const DEFAULT_DATABASE: &str = "postgres";
/// Default DSQL user. Tokens for this user come from the admin signer.
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_DSQL_PORT: u16 = 5432;
pub const DEFAULT_VALKEY_PORT: u16 = 6379;
/// Cache TTL in seconds; long enough to cover all hit iterations.
pub const DEFAULT_TTL_SECS: u64 = 30;
pub const DEFAULT_POOL_MIN: usize = 5;
pub const DEFAULT_POOL_MAX: usize = 30;
pub const DEFAULT_POOL_TIMEOUT_SECS: u64 = 30;
/// Lifetime requested for generated auth tokens.
pub const DEFAULT_TOKEN_EXPIRES_IN_SECS: u64 = 900;

/// TLS policy for DSQL connections, named after libpq's `sslmode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    Prefer,
    /// Encrypt, but do not verify the server certificate.
    #[default]
    Require,
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            _ => Err(ConfigError::InvalidSslMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Where per-connection passwords come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSource {
    /// Mint a fresh IAM token through the `aws` CLI for every physical connection.
    #[default]
    AwsCli,
    /// Use `DSQL_PASSWORD` as-is (local Postgres).
    Static,
}

impl FromStr for TokenSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws-cli" | "aws" | "iam" => Ok(Self::AwsCli),
            "static" | "password" => Ok(Self::Static),
            _ => Err(ConfigError::InvalidTokenSource {
                value: s.to_string(),
            }),
        }
    }
}

/// Demo configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults. Endpoint
/// fields are optional here because the command line may supply them.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region used for token signing. Default: `us-east-1`.
    pub region: String,

    /// DSQL cluster hostname.
    pub dsql_endpoint: Option<String>,

    /// Valkey (ElastiCache) hostname.
    pub valkey_endpoint: Option<String>,

    /// Default: `6379`.
    pub valkey_port: u16,

    /// Connect to Valkey over TLS with certificate checks disabled. Default: `true`.
    pub valkey_tls: bool,

    /// TTL applied to hydrated cache entries. Default: 30 s.
    pub cache_ttl: Duration,

    /// Default: `postgres`.
    pub database: String,

    /// Default: `admin`.
    pub user: String,

    /// Default: `5432`.
    pub dsql_port: u16,

    /// Default: [`SslMode::Require`].
    pub ssl_mode: SslMode,

    /// Connections opened eagerly before the benchmark. Default: `5`.
    pub pool_min: usize,

    /// Upper bound on physical connections. Default: `30`.
    pub pool_max: usize,

    /// Checkout and connect timeout. Default: 30 s.
    pub pool_timeout: Duration,

    /// Default: [`TokenSource::AwsCli`].
    pub token_source: TokenSource,

    /// Password used with [`TokenSource::Static`].
    pub static_password: Option<String>,

    /// Lifetime requested for generated tokens. Default: 900 s.
    pub token_expires_in: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            dsql_endpoint: None,
            valkey_endpoint: None,
            valkey_port: DEFAULT_VALKEY_PORT,
            valkey_tls: true,
            cache_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            dsql_port: DEFAULT_DSQL_PORT,
            ssl_mode: SslMode::default(),
            pool_min: DEFAULT_POOL_MIN,
            pool_max: DEFAULT_POOL_MAX,
            pool_timeout: Duration::from_secs(DEFAULT_POOL_TIMEOUT_SECS),
            token_source: TokenSource::default(),
            static_password: None,
            token_expires_in: Duration::from_secs(DEFAULT_TOKEN_EXPIRES_IN_SECS),
        }
    }
}

impl Config {
    pub const ENV_REGION: &'static str = "AWS_REGION";
    pub const ENV_DSQL_ENDPOINT: &'static str = "DSQL_ENDPOINT";
    pub const ENV_VALKEY_ENDPOINT: &'static str = "VALKEY_ENDPOINT";
    const ENV_VALKEY_PORT: &'static str = "VALKEY_PORT";
    const ENV_VALKEY_TLS: &'static str = "VALKEY_TLS";
    const ENV_VALKEY_TTL: &'static str = "VALKEY_TTL";
    const ENV_DATABASE: &'static str = "DSQL_DATABASE";
    const ENV_USER: &'static str = "DSQL_USER";
    const ENV_DSQL_PORT: &'static str = "DSQL_PORT";
    const ENV_SSL_MODE: &'static str = "DSQL_SSL_MODE";
    const ENV_POOL_MIN: &'static str = "DSQL_POOL_MIN";
    const ENV_POOL_MAX: &'static str = "DSQL_POOL_MAX";
    const ENV_POOL_TIMEOUT: &'static str = "DSQL_POOL_TIMEOUT";
    const ENV_TOKEN_SOURCE: &'static str = "DSQL_TOKEN_SOURCE";
    const ENV_PASSWORD: &'static str = "DSQL_PASSWORD";
    const ENV_TOKEN_EXPIRES_IN: &'static str = "DSQL_TOKEN_EXPIRES_IN";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Unlike a silent fallback, a variable that is set but malformed is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let region = Self::parse_string_from_env(Self::ENV_REGION, defaults.region);
        let dsql_endpoint = Self::parse_optional_string_from_env(Self::ENV_DSQL_ENDPOINT);
        let valkey_endpoint = Self::parse_optional_string_from_env(Self::ENV_VALKEY_ENDPOINT);
        let valkey_port = Self::parse_u16_from_env(Self::ENV_VALKEY_PORT, defaults.valkey_port)?;
        let valkey_tls = Self::parse_bool_from_env(Self::ENV_VALKEY_TLS, defaults.valkey_tls)?;
        let cache_ttl = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_VALKEY_TTL,
            defaults.cache_ttl.as_secs(),
        )?);
        let database = Self::parse_string_from_env(Self::ENV_DATABASE, defaults.database);
        let user = Self::parse_string_from_env(Self::ENV_USER, defaults.user);
        let dsql_port = Self::parse_u16_from_env(Self::ENV_DSQL_PORT, defaults.dsql_port)?;
        let ssl_mode = match Self::parse_optional_string_from_env(Self::ENV_SSL_MODE) {
            Some(value) => value.parse()?,
            None => defaults.ssl_mode,
        };
        let pool_min = Self::parse_u64_from_env(Self::ENV_POOL_MIN, defaults.pool_min as u64)?;
        let pool_max = Self::parse_u64_from_env(Self::ENV_POOL_MAX, defaults.pool_max as u64)?;
        let pool_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_POOL_TIMEOUT,
            defaults.pool_timeout.as_secs(),
        )?);
        let token_source = match Self::parse_optional_string_from_env(Self::ENV_TOKEN_SOURCE) {
            Some(value) => value.parse()?,
            None => defaults.token_source,
        };
        let static_password = Self::parse_optional_string_from_env(Self::ENV_PASSWORD);
        let token_expires_in = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_TOKEN_EXPIRES_IN,
            defaults.token_expires_in.as_secs(),
        )?);

        Ok(Self {
            region,
            dsql_endpoint,
            valkey_endpoint,
            valkey_port,
            valkey_tls,
            cache_ttl,
            database,
            user,
            dsql_port,
            ssl_mode,
            pool_min: pool_min as usize,
            pool_max: pool_max as usize,
            pool_timeout,
            token_source,
            static_password,
            token_expires_in,
        })
    }

    /// Validates basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_max == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }

        if self.pool_min > self.pool_max {
            return Err(ConfigError::PoolBounds {
                min: self.pool_min,
                max: self.pool_max,
            });
        }

        if self.cache_ttl.is_zero() {
            return Err(ConfigError::ZeroTtl);
        }

        if self.token_source == TokenSource::Static && self.static_password.is_none() {
            return Err(ConfigError::MissingStaticPassword);
        }

        Ok(())
    }

    /// Returns `true` when tokens must come from the admin signer.
    pub fn is_admin_user(&self) -> bool {
        self.user == DEFAULT_USER
    }

    /// Builds the Valkey connection URL.
    ///
    /// TLS uses the `#insecure` fragment, which skips certificate and hostname checks.
    pub fn valkey_url(&self, endpoint: &str) -> String {
        if self.valkey_tls {
            format!("rediss://{}:{}/#insecure", endpoint, self.valkey_port)
        } else {
            format!("redis://{}:{}/", endpoint, self.valkey_port)
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidNumber {
                name: var_name,
                value,
                source: e,
            }),
            None => Ok(default),
        }
    }

    fn parse_u16_from_env(var_name: &'static str, default: u16) -> Result<u16, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidNumber {
                name: var_name,
                value,
                source: e,
            }),
            None => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            None => Ok(default),
        }
    }
}
