use std::env;

use clap::Parser;
use serial_test::serial;

use super::*;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn config() -> Config {
    Config {
        region: "eu-west-1".to_string(),
        ..Config::default()
    }
}

#[test]
fn test_full_form() {
    let inv = Invocation::resolve(
        &args(&["us-west-2", "abc.dsql.us-west-2.on.aws", "cache.amazonaws.com"]),
        &config(),
    )
    .unwrap();

    assert_eq!(inv.region, "us-west-2");
    assert_eq!(inv.dsql_endpoint, "abc.dsql.us-west-2.on.aws");
    assert_eq!(inv.valkey_endpoint, "cache.amazonaws.com");
    assert_eq!(inv.workload, None);
    assert_eq!(inv.source, InvocationSource::Args);
}

#[test]
fn test_full_form_with_workload() {
    let inv = Invocation::resolve(&args(&["us-east-1", "d", "v", "simple"]), &config()).unwrap();
    assert_eq!(inv.workload, Some(Workload::Simple));

    let inv = Invocation::resolve(&args(&["us-east-1", "d", "v", "weird"]), &config()).unwrap();
    assert_eq!(inv.workload, Some(Workload::Complex));
}

#[test]
fn test_legacy_form_uses_config_region() {
    let inv = Invocation::resolve(&args(&["d", "v"]), &config()).unwrap();

    assert_eq!(inv.region, "eu-west-1");
    assert_eq!(inv.dsql_endpoint, "d");
    assert_eq!(inv.valkey_endpoint, "v");
    assert_eq!(inv.source, InvocationSource::Args);
}

#[test]
fn test_extra_args_are_ignored() {
    let inv = Invocation::resolve(&args(&["us-west-2", "d", "v", "simple", "extra"]), &config()).unwrap();

    assert_eq!(inv.region, "us-west-2");
    assert_eq!(inv.dsql_endpoint, "d");
    assert_eq!(inv.valkey_endpoint, "v");
    assert_eq!(inv.workload, Some(Workload::Simple));
    assert_eq!(inv.source, InvocationSource::Args);
}

#[test]
#[serial]
fn test_single_arg_falls_back_to_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("AWS_REGION", "us-east-2") };

    let cfg = Config {
        region: "us-east-2".to_string(),
        dsql_endpoint: Some("env-dsql".to_string()),
        valkey_endpoint: Some("env-valkey".to_string()),
        ..Config::default()
    };
    let inv = Invocation::resolve(&args(&["stray"]), &cfg);

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("AWS_REGION") };

    let inv = inv.unwrap();
    assert_eq!(inv.source, InvocationSource::Env);
    assert_eq!(inv.region, "us-east-2");
    assert_eq!(inv.dsql_endpoint, "env-dsql");
    assert_eq!(inv.valkey_endpoint, "env-valkey");
}

#[test]
#[serial]
fn test_env_form() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("AWS_REGION", "ap-south-1") };

    let cfg = Config {
        region: "ap-south-1".to_string(),
        dsql_endpoint: Some("d".to_string()),
        valkey_endpoint: Some("v".to_string()),
        ..Config::default()
    };
    let inv = Invocation::resolve(&[], &cfg).unwrap();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("AWS_REGION") };

    assert_eq!(inv.region, "ap-south-1");
    assert_eq!(inv.source, InvocationSource::Env);
    assert_eq!(inv.workload, None);
}

#[test]
#[serial]
fn test_env_form_requires_region() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("AWS_REGION") };

    let cfg = Config {
        dsql_endpoint: Some("d".to_string()),
        valkey_endpoint: Some("v".to_string()),
        ..Config::default()
    };
    let err = Invocation::resolve(&[], &cfg).unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::MissingEnvVar { name: "AWS_REGION" })
    ));
}

#[test]
#[serial]
fn test_env_form_requires_endpoints() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var("AWS_REGION", "us-east-1") };

    let err = Invocation::resolve(&[], &Config::default()).unwrap_err();
    let missing_valkey = Invocation::resolve(
        &[],
        &Config {
            dsql_endpoint: Some("d".to_string()),
            ..Config::default()
        },
    )
    .unwrap_err();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::remove_var("AWS_REGION") };

    assert!(matches!(
        err,
        CliError::Config(ConfigError::MissingEnvVar { name: "DSQL_ENDPOINT" })
    ));
    assert!(matches!(
        missing_valkey,
        CliError::Config(ConfigError::MissingEnvVar { name: "VALKEY_ENDPOINT" })
    ));
}

#[test]
fn test_apply_overrides_config() {
    let inv = Invocation::resolve(&args(&["us-west-2", "d", "v"]), &config()).unwrap();
    let mut cfg = config();
    inv.apply(&mut cfg);

    assert_eq!(cfg.region, "us-west-2");
    assert_eq!(cfg.dsql_endpoint.as_deref(), Some("d"));
    assert_eq!(cfg.valkey_endpoint.as_deref(), Some("v"));
}

#[test]
fn test_clap_parsing() {
    let cli = Cli::try_parse_from(["dsql-cache-bench", "us-east-1", "d", "v", "complex"]).unwrap();
    assert_eq!(cli.args, args(&["us-east-1", "d", "v", "complex"]));

    let cli = Cli::try_parse_from(["dsql-cache-bench"]).unwrap();
    assert!(cli.args.is_empty());

    let cli = Cli::try_parse_from(["dsql-cache-bench", "r", "d", "v", "simple", "extra"]).unwrap();
    assert_eq!(cli.args.len(), 5);
}

#[test]
fn test_source_tags() {
    assert_eq!(InvocationSource::Args.tag(), "[ARGS]");
    assert_eq!(InvocationSource::Env.tag(), "[ENV]");
}
