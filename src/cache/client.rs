use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};

use super::error::{CacheError, CacheResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal key-value interface used by the benchmark.
pub trait ResultCache: Send + Sync {
    /// Verifies the server answers.
    fn ping(&self) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Reads a raw value.
    fn get(&self, key: &str) -> impl std::future::Future<Output = CacheResult<Option<String>>> + Send;

    /// Writes a value that expires after `ttl` (whole seconds, at least one).
    fn set_ex(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Removes a key. Returns `true` if it existed.
    fn delete(&self, key: &str) -> impl std::future::Future<Output = CacheResult<bool>> + Send;
}

/// Valkey / ElastiCache client backed by a reconnecting [`ConnectionManager`].
#[derive(Clone)]
pub struct ValkeyCache {
    manager: ConnectionManager,
    endpoint: String,
}

impl std::fmt::Debug for ValkeyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValkeyCache")
            .field("endpoint", &self.endpoint)
            .field("manager", &"<ConnectionManager>")
            .finish()
    }
}

impl ValkeyCache {
    /// Connects to `url` and verifies the connection with `PING`.
    ///
    /// `endpoint` is only used in logs and errors.
    pub async fn connect(url: &str, endpoint: &str) -> CacheResult<Self> {
        let connect_err = |source| CacheError::Connect {
            endpoint: endpoint.to_string(),
            source,
        };

        let client = redis::Client::open(url).map_err(connect_err)?;
        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECT_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT);
        let manager = ConnectionManager::new_with_config(client, config)
            .await
            .map_err(connect_err)
            .inspect_err(|e| tracing::error!(error = %e, "error connecting to Valkey"))?;

        let cache = Self {
            manager,
            endpoint: endpoint.to_string(),
        };
        cache.ping().await?;

        tracing::info!(endpoint, "connected to Valkey");
        Ok(cache)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ResultCache for ValkeyCache {
    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.manager.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Connect {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.manager.clone();
        conn.get(key).await.map_err(|e| CacheError::Command {
            op: "GET",
            key: key.to_string(),
            source: e,
        })
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.manager.clone();
        let seconds = ttl.as_secs().max(1);
        let _: () = conn
            .set_ex(key, value, seconds)
            .await
            .map_err(|e| CacheError::Command {
                op: "SETEX",
                key: key.to_string(),
                source: e,
            })?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let mut conn = self.manager.clone();
        let removed: u64 = conn.del(key).await.map_err(|e| CacheError::Command {
            op: "DEL",
            key: key.to_string(),
            source: e,
        })?;
        Ok(removed > 0)
    }
}
