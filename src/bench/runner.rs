use std::time::Duration;

use super::error::BenchResult;
use super::stats;
use crate::cache::{CacheLookup, ResultCache, hydrate, lookup};
use crate::config::DEFAULT_TTL_SECS;
use crate::constants::DEFAULT_CACHE_HITS;
use crate::query::QueryBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchSettings {
    /// Cached reads after the cold run.
    pub cache_hits: usize,
    pub ttl: Duration,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            cache_hits: DEFAULT_CACHE_HITS,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

impl BenchSettings {
    /// Cold run plus cached reads.
    #[inline]
    pub fn total_iterations(&self) -> usize {
        self.cache_hits + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationKind {
    /// Cold run against the database.
    Miss,
    Hit,
    /// A cached read found nothing and the database was queried again.
    Rehydrated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    /// 1-based.
    pub index: usize,
    pub total: usize,
    pub kind: IterationKind,
    /// Database time for misses, cache round trip for hits.
    pub elapsed: Duration,
    /// Query time stored alongside a hit.
    pub original_dsql_time: Option<Duration>,
}

impl Iteration {
    pub fn speedup(&self) -> Option<f64> {
        stats::speedup(self.original_dsql_time?, self.elapsed)
    }

    pub fn improvement(&self) -> Option<f64> {
        stats::improvement(self.original_dsql_time?, self.elapsed)
    }
}

/// Progress notifications emitted while [`run_with`] works.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchEvent {
    Started { query: String, total: usize },
    Cleared { existed: bool },
    Iteration(Iteration),
}

/// Timings from one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub query: String,
    pub miss_time: Duration,
    pub hit_times: Vec<Duration>,
    pub rehydrations: usize,
    pub iterations: Vec<Iteration>,
}

impl BenchReport {
    pub fn avg_hit(&self) -> Option<Duration> {
        stats::mean(&self.hit_times)
    }

    pub fn min_hit(&self) -> Option<Duration> {
        self.hit_times.iter().min().copied()
    }

    pub fn max_hit(&self) -> Option<Duration> {
        self.hit_times.iter().max().copied()
    }

    /// Cold time over average hit time.
    pub fn speedup(&self) -> Option<f64> {
        stats::speedup(self.miss_time, self.avg_hit()?)
    }

    pub fn improvement_pct(&self) -> Option<f64> {
        stats::improvement(self.miss_time, self.avg_hit()?)
    }
}

/// [`run_with`] without progress output.
pub async fn run<B, C>(
    backend: &B,
    cache: &C,
    query: &str,
    settings: &BenchSettings,
) -> BenchResult<BenchReport>
where
    B: QueryBackend,
    C: ResultCache,
{
    run_with(backend, cache, query, settings, |_| {}).await
}

/// Runs the cold query once, then reads it back from the cache
/// `settings.cache_hits` times.
///
/// The query text is the cache key. The key is deleted first so the first
/// iteration is always a miss; a failed delete is logged and the run goes on.
pub async fn run_with<B, C, F>(
    backend: &B,
    cache: &C,
    query: &str,
    settings: &BenchSettings,
    mut on_event: F,
) -> BenchResult<BenchReport>
where
    B: QueryBackend,
    C: ResultCache,
    F: FnMut(&BenchEvent),
{
    let total = settings.total_iterations();
    on_event(&BenchEvent::Started {
        query: query.to_string(),
        total,
    });

    let existed = match cache.delete(query).await {
        Ok(existed) => {
            tracing::info!(existed, "cleared cache entry");
            existed
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to clear cache entry, continuing");
            false
        }
    };
    on_event(&BenchEvent::Cleared { existed });

    let outcome = backend.execute(query).await?;
    hydrate(cache, query, &outcome.rendered, outcome.elapsed, settings.ttl).await?;
    let miss_time = outcome.elapsed;

    let mut iterations = Vec::with_capacity(total);
    let mut hit_times = Vec::with_capacity(settings.cache_hits);
    let mut rehydrations = 0;

    let first = Iteration {
        index: 1,
        total,
        kind: IterationKind::Miss,
        elapsed: miss_time,
        original_dsql_time: None,
    };
    on_event(&BenchEvent::Iteration(first.clone()));
    iterations.push(first);

    for index in 2..=total {
        let iteration = match lookup(cache, query).await? {
            CacheLookup::Hit {
                access_time,
                original_dsql_time,
                ..
            } => {
                hit_times.push(access_time);
                Iteration {
                    index,
                    total,
                    kind: IterationKind::Hit,
                    elapsed: access_time,
                    original_dsql_time: Some(original_dsql_time),
                }
            }
            CacheLookup::Miss { .. } => {
                tracing::warn!(iteration = index, "unexpected cache miss, rehydrating");
                let outcome = backend.execute(query).await?;
                hydrate(cache, query, &outcome.rendered, outcome.elapsed, settings.ttl).await?;
                rehydrations += 1;
                Iteration {
                    index,
                    total,
                    kind: IterationKind::Rehydrated,
                    elapsed: outcome.elapsed,
                    original_dsql_time: None,
                }
            }
        };
        on_event(&BenchEvent::Iteration(iteration.clone()));
        iterations.push(iteration);
    }

    tracing::info!(
        miss_time = ?miss_time,
        hits = hit_times.len(),
        rehydrations,
        "benchmark complete"
    );

    Ok(BenchReport {
        query: query.to_string(),
        miss_time,
        hit_times,
        rehydrations,
        iterations,
    })
}
