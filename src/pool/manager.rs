use std::sync::Arc;
use std::time::Duration;

use deadpool::managed::{self, Metrics, RecycleError, RecycleResult};
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::Client;

use super::config::ConnectionTarget;
use super::error::PoolError;
use super::tls::make_tls_connector;
use crate::token::TokenProvider;

/// Opens DSQL connections, injecting a freshly generated token as the password
/// of every new physical connection.
pub struct DsqlManager {
    target: ConnectionTarget,
    provider: Arc<dyn TokenProvider>,
    tls: MakeTlsConnector,
    connect_timeout: Duration,
}

impl DsqlManager {
    pub fn new(
        target: ConnectionTarget,
        provider: Arc<dyn TokenProvider>,
        connect_timeout: Duration,
    ) -> Result<Self, PoolError> {
        Ok(Self {
            target,
            provider,
            tls: make_tls_connector()?,
            connect_timeout,
        })
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }
}

impl managed::Manager for DsqlManager {
    type Type = Client;
    type Error = PoolError;

    async fn create(&self) -> Result<Client, PoolError> {
        let token = self
            .provider
            .generate(&self.target.host, &self.target.region)
            .await?;

        let pg = self.target.pg_config(token.as_str(), self.connect_timeout);
        let (client, connection) =
            pg.connect(self.tls.clone())
                .await
                .map_err(|e| PoolError::Connect {
                    host: self.target.host.clone(),
                    source: e,
                })?;

        let host = self.target.host.clone();
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!(host = %host, error = %e, "dsql connection terminated");
            }
        });

        tracing::debug!(host = %self.target.host, "opened physical connection");
        Ok(client)
    }

    async fn recycle(&self, client: &mut Client, _metrics: &Metrics) -> RecycleResult<PoolError> {
        if client.is_closed() {
            tracing::debug!("pooled connection closed, discarding");
            return Err(RecycleError::Backend(PoolError::Stale {
                reason: "connection closed".to_string(),
            }));
        }

        client.simple_query("SELECT 1").await.map_err(|e| {
            tracing::debug!(error = %e, "pooled connection failed liveness check, discarding");
            RecycleError::Backend(PoolError::Stale {
                reason: e.to_string(),
            })
        })?;

        Ok(())
    }
}
