use std::time::Duration;

use crate::config::{Config, SslMode};

/// Sizing and timeout policy for the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Connections opened by [`super::DsqlPool::prewarm`].
    pub min: usize,
    /// Hard cap on physical connections.
    pub max: usize,
    /// Applied to checkout wait, connection create and recycle.
    pub timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        let config = Config::default();
        Self::from_config(&config)
    }
}

impl PoolSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min: config.pool_min,
            max: config.pool_max,
            timeout: config.pool_timeout,
        }
    }
}

/// Where and as whom each physical connection logs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    /// Region the auth token is signed for.
    pub region: String,
    pub ssl_mode: SslMode,
}

impl ConnectionTarget {
    pub fn from_config(config: &Config, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: config.dsql_port,
            database: config.database.clone(),
            user: config.user.clone(),
            region: config.region.clone(),
            ssl_mode: config.ssl_mode,
        }
    }

    /// Builds driver settings with `password` injected.
    pub fn pg_config(&self, password: &str, connect_timeout: Duration) -> tokio_postgres::Config {
        let mut pg = tokio_postgres::Config::new();
        pg.host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .password(password)
            .ssl_mode(self.ssl_mode.into())
            .connect_timeout(connect_timeout)
            .application_name("dsql-cache-bench");
        pg
    }
}

impl From<SslMode> for tokio_postgres::config::SslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => tokio_postgres::config::SslMode::Disable,
            SslMode::Prefer => tokio_postgres::config::SslMode::Prefer,
            SslMode::Require => tokio_postgres::config::SslMode::Require,
        }
    }
}
