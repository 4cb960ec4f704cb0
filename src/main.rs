//! DSQL cache benchmark entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

use dsqlbench::bench::{BenchSettings, Workload, run_with};
use dsqlbench::cache::ValkeyCache;
use dsqlbench::cli::{Cli, CliError, Invocation};
use dsqlbench::config::{Config, ConfigError};
use dsqlbench::constants::DEFAULT_CACHE_HITS;
use dsqlbench::pool::{ConnectionTarget, DsqlPool, PoolSettings};
use dsqlbench::prompt::{confirm, prompt_workload};
use dsqlbench::setup::{SetupReport, ensure_seed_table};
use dsqlbench::token::build_token_provider;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (config, invocation) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(CliError::Config(ConfigError::MissingEnvVar { name })) => {
            tracing::error!(variable = name, "missing required configuration");
            print_missing_configuration(name);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            println!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    print_banner(&invocation);

    let workload = match choose_workload(&invocation) {
        Ok(Some(workload)) => workload,
        Ok(None) => {
            println!("[CANCELLED] Test cancelled by user.");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "failed to read workload choice");
            println!("[ERROR] {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_demo(&config, &invocation, workload).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "error in demo");
            print_troubleshooting(workload);
            ExitCode::FAILURE
        }
    }
}

fn load(cli: &Cli) -> Result<(Config, Invocation), CliError> {
    let mut config = Config::from_env()?;
    let invocation = Invocation::resolve(&cli.args, &config)?;
    invocation.apply(&mut config);
    config.validate()?;
    Ok((config, invocation))
}

fn print_banner(invocation: &Invocation) {
    let tag = invocation.source.tag();
    println!("{tag} AWS Region: {}", invocation.region);
    println!("{tag} DSQL Endpoint: {}", invocation.dsql_endpoint);
    println!("{tag} Valkey Endpoint: {}", invocation.valkey_endpoint);
    println!("[START] DSQL ElastiCache Performance Test");
    println!("Timestamp: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"));
}

/// `Ok(None)` when the user declines the complex run.
fn choose_workload(invocation: &Invocation) -> anyhow::Result<Option<Workload>> {
    if let Some(workload) = invocation.workload {
        println!("\n[AUTOMATED] Running in automated mode with query type: {workload}");
        return Ok(Some(workload));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let workload = prompt_workload(&mut input, &mut output)?;
    if workload == Workload::Complex {
        println!("\n[INFO] Complex execution selected.");
        println!("[INFO] Ensure users and orders tables exist with sample data.");
        if !confirm(&mut input, &mut output, "Proceed with complex query test?")? {
            return Ok(None);
        }
    }
    output.flush()?;
    Ok(Some(workload))
}

async fn run_demo(config: &Config, invocation: &Invocation, workload: Workload) -> anyhow::Result<()> {
    let provider = build_token_provider(config);
    let target = ConnectionTarget::from_config(config, invocation.dsql_endpoint.clone());
    let pool = DsqlPool::new(target, PoolSettings::from_config(config), provider)?;

    let result = run_with_pool(&pool, config, invocation, workload).await;
    pool.close();
    result
}

async fn run_with_pool(
    pool: &DsqlPool,
    config: &Config,
    invocation: &Invocation,
    workload: Workload,
) -> anyhow::Result<()> {
    if workload.seeds_own_table() {
        println!("\n[SETUP] Setting up users1 table for simple query testing...");
        let report = ensure_seed_table(pool)
            .await
            .context("failed to set up users1 table")?;
        print_setup(&report);
    }

    let query = workload.query();
    println!("\n[START] Starting DSQL ElastiCache Performance Demo with Connection Pooling");
    println!("DSQL Endpoint: {}", invocation.dsql_endpoint);
    println!("Valkey Endpoint: {}", invocation.valkey_endpoint);
    println!(
        "Connection Pool: min={}, max={}",
        config.pool_min, config.pool_max
    );
    println!("Query Type: {}", workload.as_str().to_uppercase());

    let url = config.valkey_url(&invocation.valkey_endpoint);
    let cache = ValkeyCache::connect(&url, &invocation.valkey_endpoint).await?;

    let warmed = pool.prewarm().await?;
    tracing::info!(idle = warmed, "connection pool ready");

    let settings = BenchSettings {
        cache_hits: DEFAULT_CACHE_HITS,
        ttl: config.cache_ttl,
    };
    let report = run_with(pool, &cache, query, &settings, |event| println!("{event}")).await?;

    println!("\n{report}");
    if let Some(summary) = report.summary() {
        tracing::debug!(summary = %serde_json::to_string(&summary)?, "benchmark summary");
    }
    Ok(())
}

fn print_setup(report: &SetupReport) {
    if report.created {
        println!("[OK] users1 table created successfully");
    }
    if report.inserted > 0 {
        println!(
            "[OK] Test data inserted successfully. Total rows: {}",
            report.row_count
        );
    } else {
        println!(
            "[OK] Table already has data, ready to proceed ({} rows)",
            report.row_count
        );
    }

    println!("\n[SAMPLE] Sample data from users1 table:");
    for user in &report.sample {
        println!(
            "   ID: {}, Name: {}, Email: {}, Dept: {}",
            user.id,
            user.name,
            user.email,
            user.department.as_deref().unwrap_or("None")
        );
    }
    println!("\n[READY] Database setup complete! Ready for performance testing.");
}

fn print_missing_configuration(name: &str) {
    println!("[ERROR] Missing required configuration! ({name} is not set)");
    println!("[ERROR]");
    println!(
        "[ERROR] Set {}, {} and {}, or pass them as arguments:",
        Config::ENV_REGION,
        Config::ENV_DSQL_ENDPOINT,
        Config::ENV_VALKEY_ENDPOINT
    );
    println!("[ERROR]   dsql-cache-bench <region> <dsql-endpoint> <valkey-endpoint> [simple|complex]");
}

fn print_troubleshooting(workload: Workload) {
    println!("\n[TROUBLESHOOT] Troubleshooting tips:");
    println!("   - Ensure you're running from CloudShell or a host inside the cluster's VPC");
    println!("   - Verify ElastiCache endpoint is reachable");
    println!("   - Check DSQL cluster endpoint and permissions");
    println!("   - Make sure the required tables exist in the database:");
    println!("     - For QUERY_TYPE=simple: users1 table (created automatically)");
    println!("     - For QUERY_TYPE=complex: users and orders tables with sample data");
    println!("   - Current query type: {workload}");
}
