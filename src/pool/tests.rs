use super::*;
use crate::config::{Config, SslMode};
use crate::token::MockTokenProvider;

use std::sync::Arc;
use std::time::Duration;
use tokio_postgres::config::Host;

fn local_target(port: u16) -> ConnectionTarget {
    ConnectionTarget {
        host: "127.0.0.1".to_string(),
        port,
        database: "postgres".to_string(),
        user: "admin".to_string(),
        region: "us-east-1".to_string(),
        ssl_mode: SslMode::Disable,
    }
}

fn small_settings() -> PoolSettings {
    PoolSettings {
        min: 2,
        max: 4,
        timeout: Duration::from_secs(2),
    }
}

#[test]
fn test_settings_from_config() {
    let config = Config {
        pool_min: 1,
        pool_max: 7,
        pool_timeout: Duration::from_secs(9),
        ..Default::default()
    };

    let settings = PoolSettings::from_config(&config);
    assert_eq!(settings.min, 1);
    assert_eq!(settings.max, 7);
    assert_eq!(settings.timeout, Duration::from_secs(9));
    assert_eq!(PoolSettings::default().max, 30);
}

#[test]
fn test_target_from_config() {
    let config = Config {
        region: "ap-northeast-1".to_string(),
        ..Default::default()
    };

    let target = ConnectionTarget::from_config(&config, "xyz.dsql.ap-northeast-1.on.aws");
    assert_eq!(target.host, "xyz.dsql.ap-northeast-1.on.aws");
    assert_eq!(target.region, "ap-northeast-1");
    assert_eq!(target.user, "admin");
    assert_eq!(target.database, "postgres");
    assert_eq!(target.port, 5432);
    assert_eq!(target.ssl_mode, SslMode::Require);
}

#[test]
fn test_pg_config_injects_password() {
    let target = ConnectionTarget {
        ssl_mode: SslMode::Require,
        ..local_target(5432)
    };

    let pg = target.pg_config("signed-token", Duration::from_secs(3));

    assert_eq!(pg.get_password(), Some(&b"signed-token"[..]));
    assert_eq!(pg.get_user(), Some("admin"));
    assert_eq!(pg.get_dbname(), Some("postgres"));
    assert_eq!(pg.get_ports(), &[5432]);
    assert_eq!(pg.get_connect_timeout(), Some(&Duration::from_secs(3)));
    assert!(matches!(pg.get_hosts(), [Host::Tcp(h)] if h == "127.0.0.1"));
    assert!(matches!(
        pg.get_ssl_mode(),
        tokio_postgres::config::SslMode::Require
    ));
}

#[tokio::test]
async fn test_new_pool_is_empty() {
    let provider = Arc::new(MockTokenProvider::new());
    let pool = DsqlPool::new(local_target(1), small_settings(), provider.clone()).unwrap();

    let status = pool.status();
    assert_eq!(status.max_size, 4);
    assert_eq!(status.size, 0);
    assert_eq!(provider.issued(), 0);
    assert!(!pool.is_closed());
}

#[tokio::test]
async fn test_get_propagates_token_failure() {
    let provider = Arc::new(MockTokenProvider::failing());
    let pool = DsqlPool::new(local_target(1), small_settings(), provider).unwrap();

    let err = pool.get().await.err().expect("checkout should fail");
    assert!(matches!(err, PoolError::Token(_)));
}

#[tokio::test]
async fn test_each_connection_attempt_generates_a_token() {
    let provider = Arc::new(MockTokenProvider::new());
    // Port 1 refuses connections, so each checkout runs `create` once.
    let pool = DsqlPool::new(local_target(1), small_settings(), provider.clone()).unwrap();

    for _ in 0..3 {
        let err = pool.get().await.err().expect("connect should fail");
        assert!(matches!(err, PoolError::Connect { .. }));
    }

    assert_eq!(provider.issued(), 3);
}

#[tokio::test]
async fn test_prewarm_with_zero_min_is_noop() {
    let provider = Arc::new(MockTokenProvider::new());
    let settings = PoolSettings {
        min: 0,
        ..small_settings()
    };
    let pool = DsqlPool::new(local_target(1), settings, provider.clone()).unwrap();

    assert_eq!(pool.prewarm().await.unwrap(), 0);
    assert_eq!(provider.issued(), 0);
}

#[tokio::test]
async fn test_prewarm_surfaces_connect_errors() {
    let provider = Arc::new(MockTokenProvider::new());
    let pool = DsqlPool::new(local_target(1), small_settings(), provider).unwrap();

    assert!(pool.prewarm().await.is_err());
}

#[tokio::test]
async fn test_closed_pool_rejects_checkout() {
    let provider = Arc::new(MockTokenProvider::new());
    let pool = DsqlPool::new(local_target(1), small_settings(), provider.clone()).unwrap();

    pool.close();
    pool.close();

    assert!(pool.is_closed());
    let err = pool.get().await.err().expect("closed pool");
    assert!(matches!(err, PoolError::Closed));
    assert_eq!(provider.issued(), 0);
}
