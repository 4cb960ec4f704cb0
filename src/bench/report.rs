//! Console rendering and the serializable summary of a [`BenchReport`].

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::runner::{BenchEvent, BenchReport, Iteration, IterationKind};
use super::stats::{millis, round1};

const RULE_WIDTH: usize = 60;

/// Millisecond metrics rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSummary {
    pub dsql_time_ms: f64,
    pub cache_avg_ms: f64,
    pub cache_min_ms: f64,
    pub cache_max_ms: f64,
    pub cache_hits: usize,
    pub rehydrations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speedup: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<f64>,
}

impl BenchReport {
    /// `None` when no cached read succeeded.
    pub fn summary(&self) -> Option<BenchSummary> {
        let avg = self.avg_hit()?;
        let min = self.min_hit()?;
        let max = self.max_hit()?;

        Some(BenchSummary {
            dsql_time_ms: round1(millis(self.miss_time)),
            cache_avg_ms: round1(millis(avg)),
            cache_min_ms: round1(millis(min)),
            cache_max_ms: round1(millis(max)),
            cache_hits: self.hit_times.len(),
            rehydrations: self.rehydrations,
            speedup: self.speedup().map(round1),
            improvement: self.improvement_pct().map(round1),
        })
    }
}

/// `0.123456s (123.5ms)`
pub fn format_secs(d: Duration) -> String {
    format!("{:.6}s ({:.1}ms)", d.as_secs_f64(), millis(d))
}

fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "PERFORMANCE SUMMARY - COMPLETE DEMO WITH CONNECTION POOLING")?;
        writeln!(f, "{}", rule('='))?;
        writeln!(f, "Cache Miss (DSQL):            {}", format_secs(self.miss_time))?;

        if let (Some(avg), Some(min), Some(max)) = (self.avg_hit(), self.min_hit(), self.max_hit()) {
            writeln!(f)?;
            writeln!(f, "Cache Hits ({} iterations):", self.hit_times.len())?;
            writeln!(f, "  Average:  {}", format_secs(avg))?;
            writeln!(f, "  Min:      {}", format_secs(min))?;
            writeln!(f, "  Max:      {}", format_secs(max))?;

            if let (Some(speedup), Some(improvement)) = (self.speedup(), self.improvement_pct()) {
                writeln!(f)?;
                writeln!(f, "{}", rule('-'))?;
                writeln!(f, "PERFORMANCE IMPROVEMENT:")?;
                writeln!(f, "  DSQL:     {:.1}ms", millis(self.miss_time))?;
                writeln!(f, "  Cache:    {:.1}ms", millis(avg))?;
                writeln!(f, "  Speedup:  {:.1}x faster", speedup)?;
                writeln!(f, "  Improvement: {:.1}%", improvement)?;
            }
        } else {
            writeln!(f)?;
            writeln!(f, "No cache hits recorded.")?;
        }

        if self.rehydrations > 0 {
            writeln!(f, "Rehydrations: {}", self.rehydrations)?;
        }
        write!(f, "{}", rule('='))
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IterationKind::Miss => {
                writeln!(f, "[CACHE MISS - ITERATION {}/{}]", self.index, self.total)?;
                write!(f, "[INFO] Cache hydrated. DSQL time: {}", format_secs(self.elapsed))
            }
            IterationKind::Hit => {
                writeln!(f, "[CACHE HIT - ITERATION {}/{}]", self.index, self.total)?;
                writeln!(f, "[OK] Query result fetched from ElastiCache")?;
                write!(f, "Cache access time: {}", format_secs(self.elapsed))?;
                match (self.speedup(), self.improvement()) {
                    (Some(speedup), Some(improvement)) => write!(
                        f,
                        "\nSpeedup: {:.2}x faster | Improvement: {:.1}%",
                        speedup, improvement
                    ),
                    _ => write!(f, "\n[WARNING] Original DSQL time not found in cache"),
                }
            }
            IterationKind::Rehydrated => {
                writeln!(f, "[CACHE HIT - ITERATION {}/{}]", self.index, self.total)?;
                writeln!(f, "[WARNING] Unexpected cache miss during hit iterations. Rehydrated.")?;
                write!(f, "DSQL time: {}", format_secs(self.elapsed))
            }
        }
    }
}

impl fmt::Display for BenchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchEvent::Started { query, total } => {
                writeln!(f, "Iterations: {}", total)?;
                writeln!(f, "Query: {}", query)?;
                write!(f, "{}", rule('-'))
            }
            BenchEvent::Cleared { existed: true } => write!(f, "[OK] Cache cleared"),
            BenchEvent::Cleared { existed: false } => write!(f, "[INFO] No existing cache to clear"),
            BenchEvent::Iteration(iteration) => write!(f, "\n{}", iteration),
        }
    }
}
