//! Token-refreshing DSQL connection pool.
//!
//! A stock [`deadpool::managed::Pool`] whose manager asks a
//! [`TokenProvider`](crate::token::TokenProvider) for a new password each time
//! it opens a physical connection. Idle connections are validated with
//! `SELECT 1` on checkout; a failed check drops the connection and a fresh one
//! (with a fresh token) is opened in its place.

pub mod config;
pub mod error;
pub mod manager;
pub mod tls;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use deadpool::Runtime;
use deadpool::managed::{self, Object};
use futures_util::future::try_join_all;

pub use config::{ConnectionTarget, PoolSettings};
pub use error::{PoolError, PoolResult};
pub use manager::DsqlManager;

use crate::token::TokenProvider;

/// A checked-out connection; returns to the pool on drop.
pub type DsqlConnection = Object<DsqlManager>;

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub max_size: usize,
    pub size: usize,
    pub available: usize,
    pub waiting: usize,
}

/// Bounded pool of DSQL connections.
pub struct DsqlPool {
    inner: managed::Pool<DsqlManager>,
    settings: PoolSettings,
}

impl DsqlPool {
    /// Builds the pool. No connection is opened until [`prewarm`](Self::prewarm)
    /// or the first [`get`](Self::get).
    pub fn new(
        target: ConnectionTarget,
        settings: PoolSettings,
        provider: Arc<dyn TokenProvider>,
    ) -> PoolResult<Self> {
        let manager = DsqlManager::new(target, provider, settings.timeout)?;

        let inner = managed::Pool::builder(manager)
            .max_size(settings.max)
            .wait_timeout(Some(settings.timeout))
            .create_timeout(Some(settings.timeout))
            .recycle_timeout(Some(settings.timeout))
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| PoolError::Build {
                message: e.to_string(),
            })?;

        tracing::info!(
            min = settings.min,
            max = settings.max,
            "initialized DSQL connection pool with per-connection token generation"
        );

        Ok(Self { inner, settings })
    }

    /// Opens `settings.min` connections concurrently and returns them to the pool.
    ///
    /// Returns the number of idle connections afterwards.
    pub async fn prewarm(&self) -> PoolResult<usize> {
        if self.settings.min == 0 {
            return Ok(0);
        }

        let checkouts = (0..self.settings.min).map(|_| self.inner.get());
        let connections = try_join_all(checkouts).await?;
        drop(connections);

        let status = self.status();
        tracing::info!(
            opened = status.size,
            available = status.available,
            "connection pool warmed"
        );
        Ok(status.available)
    }

    /// Checks out a connection, opening one if none is idle.
    pub async fn get(&self) -> PoolResult<DsqlConnection> {
        let conn = self.inner.get().await.inspect_err(|e| {
            tracing::error!(error = %e, "error getting connection from pool");
        })?;
        tracing::debug!("retrieved connection from pool");
        Ok(conn)
    }

    pub fn status(&self) -> PoolStatus {
        let status = self.inner.status();
        PoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    pub fn target(&self) -> &ConnectionTarget {
        self.inner.manager().target()
    }

    /// Closes the pool; idle connections are dropped and later checkouts fail.
    pub fn close(&self) {
        if !self.inner.is_closed() {
            self.inner.close();
            tracing::info!("closed all connections in pool");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}
