//! Command-line surface.
//!
//! Endpoints come from positional arguments or, when fewer than two are given,
//! from the environment:
//!
//! ```text
//! dsql-cache-bench <region> <dsql-endpoint> <valkey-endpoint> [simple|complex]
//! dsql-cache-bench <dsql-endpoint> <valkey-endpoint>
//! dsql-cache-bench            # AWS_REGION, DSQL_ENDPOINT, VALKEY_ENDPOINT
//! ```

pub mod error;

#[cfg(test)]
mod tests;

use std::env;

use clap::Parser;

pub use error::{CliError, CliResult};

use crate::bench::Workload;
use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "dsql-cache-bench", version)]
#[command(about = "Compare Aurora DSQL query latency with ElastiCache (Valkey) cached reads")]
pub struct Cli {
    /// `<region> <dsql-endpoint> <valkey-endpoint> [simple|complex]`, or the
    /// legacy `<dsql-endpoint> <valkey-endpoint>`
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Where the endpoints were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationSource {
    Args,
    Env,
}

impl InvocationSource {
    /// Console tag for the banner.
    pub fn tag(&self) -> &'static str {
        match self {
            InvocationSource::Args => "[ARGS]",
            InvocationSource::Env => "[ENV]",
        }
    }
}

/// Resolved endpoints for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub region: String,
    pub dsql_endpoint: String,
    pub valkey_endpoint: String,
    /// `None` means ask interactively.
    pub workload: Option<Workload>,
    pub source: InvocationSource,
}

impl Invocation {
    /// Resolves positional `args` against `config`.
    ///
    /// The legacy two-argument form takes the region from `config`. Arguments
    /// past the fourth are ignored. With fewer than two arguments all three of
    /// `AWS_REGION`, `DSQL_ENDPOINT` and `VALKEY_ENDPOINT` must be set.
    pub fn resolve(args: &[String], config: &Config) -> CliResult<Self> {
        match args {
            [region, dsql, valkey, rest @ ..] => {
                if rest.len() > 1 {
                    tracing::warn!(ignored = rest.len() - 1, "ignoring extra positional arguments");
                }
                Ok(Self {
                    region: region.clone(),
                    dsql_endpoint: dsql.clone(),
                    valkey_endpoint: valkey.clone(),
                    workload: rest.first().map(|name| Workload::from_name_lossy(name)),
                    source: InvocationSource::Args,
                })
            }
            [dsql, valkey] => Ok(Self {
                region: config.region.clone(),
                dsql_endpoint: dsql.clone(),
                valkey_endpoint: valkey.clone(),
                workload: None,
                source: InvocationSource::Args,
            }),
            [] | [_] => Self::from_config(config),
        }
    }

    fn from_config(config: &Config) -> CliResult<Self> {
        if env::var(Config::ENV_REGION).map_or(true, |v| v.trim().is_empty()) {
            return Err(ConfigError::MissingEnvVar {
                name: Config::ENV_REGION,
            }
            .into());
        }
        let dsql_endpoint = config.dsql_endpoint.clone().ok_or(ConfigError::MissingEnvVar {
            name: Config::ENV_DSQL_ENDPOINT,
        })?;
        let valkey_endpoint = config
            .valkey_endpoint
            .clone()
            .ok_or(ConfigError::MissingEnvVar {
                name: Config::ENV_VALKEY_ENDPOINT,
            })?;

        Ok(Self {
            region: config.region.clone(),
            dsql_endpoint,
            valkey_endpoint,
            workload: None,
            source: InvocationSource::Env,
        })
    }

    /// Copies the resolved endpoints into `config`.
    pub fn apply(&self, config: &mut Config) {
        config.region = self.region.clone();
        config.dsql_endpoint = Some(self.dsql_endpoint.clone());
        config.valkey_endpoint = Some(self.valkey_endpoint.clone());
    }
}
