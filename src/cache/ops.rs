//! Hydrate and timed lookup on top of a [`ResultCache`].

use std::time::{Duration, Instant};

use super::client::ResultCache;
use super::envelope::CacheEnvelope;
use super::error::CacheResult;
use super::types::CacheLookup;

/// Stores `result` under `key` with its original query time, expiring after `ttl`.
pub async fn hydrate<C: ResultCache>(
    cache: &C,
    key: &str,
    result: &str,
    dsql_time: Duration,
    ttl: Duration,
) -> CacheResult<()> {
    let envelope = CacheEnvelope::new(result, dsql_time);
    let json = envelope.to_json()?;

    cache
        .set_ex(key, &json, ttl)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to hydrate cache"))?;

    tracing::info!(
        ttl_secs = ttl.as_secs(),
        dsql_time = ?dsql_time,
        "cache hydrated"
    );
    Ok(())
}

/// Reads `key`, timing only the round trip.
///
/// An entry that fails to decode is logged and reported as a miss.
pub async fn lookup<C: ResultCache>(cache: &C, key: &str) -> CacheResult<CacheLookup> {
    let start = Instant::now();
    let raw = cache.get(key).await?;
    let access_time = start.elapsed();

    let Some(json) = raw else {
        tracing::info!(access_time = ?access_time, "cache miss");
        return Ok(CacheLookup::Miss { access_time });
    };

    match CacheEnvelope::from_json(&json) {
        Ok(envelope) => {
            let original_dsql_time = envelope.dsql_time();
            tracing::info!(
                access_time = ?access_time,
                original_dsql_time = ?original_dsql_time,
                "cache hit"
            );
            Ok(CacheLookup::Hit {
                result: envelope.result,
                access_time,
                original_dsql_time,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "cache entry is not a valid envelope, treating as miss");
            Ok(CacheLookup::Miss { access_time })
        }
    }
}
