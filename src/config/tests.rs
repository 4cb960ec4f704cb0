use super::*;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_bench_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        for var in [
            "AWS_REGION",
            "DSQL_ENDPOINT",
            "VALKEY_ENDPOINT",
            "VALKEY_PORT",
            "VALKEY_TLS",
            "VALKEY_TTL",
            "DSQL_DATABASE",
            "DSQL_USER",
            "DSQL_PORT",
            "DSQL_SSL_MODE",
            "DSQL_POOL_MIN",
            "DSQL_POOL_MAX",
            "DSQL_POOL_TIMEOUT",
            "DSQL_TOKEN_SOURCE",
            "DSQL_PASSWORD",
            "DSQL_TOKEN_EXPIRES_IN",
        ] {
            env::remove_var(var);
        }
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.database, "postgres");
    assert_eq!(config.user, "admin");
    assert_eq!(config.cache_ttl, Duration::from_secs(30));
    assert_eq!(config.pool_min, 5);
    assert_eq!(config.pool_max, 30);
    assert_eq!(config.pool_timeout, Duration::from_secs(30));
    assert_eq!(config.ssl_mode, SslMode::Require);
    assert_eq!(config.token_source, TokenSource::AwsCli);
    assert!(config.valkey_tls);
    assert!(config.dsql_endpoint.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_bench_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.valkey_port, 6379);
    assert!(config.valkey_endpoint.is_none());
}

#[test]
#[serial]
fn test_from_env_reads_endpoints_and_region() {
    clear_bench_env();

    with_env_vars(
        &[
            ("AWS_REGION", "eu-west-1"),
            ("DSQL_ENDPOINT", "abc.dsql.eu-west-1.on.aws"),
            ("VALKEY_ENDPOINT", "  cache.example.internal  "),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.region, "eu-west-1");
            assert_eq!(
                config.dsql_endpoint.as_deref(),
                Some("abc.dsql.eu-west-1.on.aws")
            );
            assert_eq!(
                config.valkey_endpoint.as_deref(),
                Some("cache.example.internal")
            );
        },
    );
}

#[test]
#[serial]
fn test_from_env_pool_overrides() {
    clear_bench_env();

    with_env_vars(
        &[
            ("DSQL_POOL_MIN", "2"),
            ("DSQL_POOL_MAX", "8"),
            ("DSQL_POOL_TIMEOUT", "5"),
            ("VALKEY_TTL", "120"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.pool_min, 2);
            assert_eq!(config.pool_max, 8);
            assert_eq!(config.pool_timeout, Duration::from_secs(5));
            assert_eq!(config.cache_ttl, Duration::from_secs(120));
        },
    );
}

#[test]
#[serial]
fn test_from_env_malformed_number_is_error() {
    clear_bench_env();

    with_env_vars(&[("DSQL_POOL_MAX", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "DSQL_POOL_MAX",
                ..
            }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_port_out_of_range() {
    clear_bench_env();

    with_env_vars(&[("VALKEY_PORT", "70000")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidNumber { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_ssl_mode_and_tls_flag() {
    clear_bench_env();

    with_env_vars(&[("DSQL_SSL_MODE", "Prefer"), ("VALKEY_TLS", "0")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.ssl_mode, SslMode::Prefer);
        assert!(!config.valkey_tls);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_ssl_mode() {
    clear_bench_env();

    with_env_vars(&[("DSQL_SSL_MODE", "verify-full")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidSslMode { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_bool() {
    clear_bench_env();

    with_env_vars(&[("VALKEY_TLS", "maybe")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBool {
                name: "VALKEY_TLS",
                ..
            })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_static_token_source() {
    clear_bench_env();

    with_env_vars(
        &[("DSQL_TOKEN_SOURCE", "static"), ("DSQL_PASSWORD", "hunter2")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.token_source, TokenSource::Static);
            assert_eq!(config.static_password.as_deref(), Some("hunter2"));
            assert!(config.validate().is_ok());
        },
    );
}

#[test]
fn test_validate_rejects_inverted_pool_bounds() {
    let config = Config {
        pool_min: 10,
        pool_max: 3,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PoolBounds { min: 10, max: 3 })
    ));
}

#[test]
fn test_validate_rejects_zero_pool_and_ttl() {
    let config = Config {
        pool_min: 0,
        pool_max: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroPoolSize)));

    let config = Config {
        cache_ttl: Duration::ZERO,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTtl)));
}

#[test]
fn test_validate_static_without_password() {
    let config = Config {
        token_source: TokenSource::Static,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingStaticPassword)
    ));
}

#[test]
fn test_valkey_url() {
    let config = Config::default();
    assert_eq!(
        config.valkey_url("cache.local"),
        "rediss://cache.local:6379/#insecure"
    );

    let config = Config {
        valkey_tls: false,
        valkey_port: 6380,
        ..Default::default()
    };
    assert_eq!(config.valkey_url("localhost"), "redis://localhost:6380/");
}

#[test]
fn test_is_admin_user() {
    assert!(Config::default().is_admin_user());

    let config = Config {
        user: "reporter".to_string(),
        ..Default::default()
    };
    assert!(!config.is_admin_user());
}
