use std::time::Duration;

/// `slow / fast`, or `None` when `fast` is zero.
pub fn speedup(slow: Duration, fast: Duration) -> Option<f64> {
    let fast = fast.as_secs_f64();
    (fast > 0.0).then(|| slow.as_secs_f64() / fast)
}

/// Percentage of `slow` saved by `fast`, or `None` when `slow` is zero.
pub fn improvement(slow: Duration, fast: Duration) -> Option<f64> {
    let slow_secs = slow.as_secs_f64();
    (slow_secs > 0.0).then(|| (slow_secs - fast.as_secs_f64()) / slow_secs * 100.0)
}

pub fn mean(samples: &[Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let total: Duration = samples.iter().sum();
    let mean = match u32::try_from(samples.len()) {
        Ok(count) => total / count,
        Err(_) => total.div_f64(samples.len() as f64),
    };
    Some(mean)
}

#[inline]
pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Rounds to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
