use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::client::ResultCache;
use super::error::{CacheError, CacheResult};

#[derive(Clone)]
struct MockEntry {
    value: String,
    expires_at: Instant,
}

/// In-memory [`ResultCache`] with TTL expiry.
#[derive(Default)]
pub struct MockResultCache {
    entries: Mutex<HashMap<String, MockEntry>>,
    gets: AtomicUsize,
    offline: AtomicBool,
}

impl MockResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls served.
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Drops an entry behind the caller's back, as an early expiry would.
    pub fn evict(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    /// Makes every subsequent call fail.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Remaining lifetime of a live entry.
    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.lock();
        let entry = entries.get(key)?;
        entry.expires_at.checked_duration_since(Instant::now())
    }

    /// Stores a raw value (bypassing the envelope).
    pub fn insert_raw(&self, key: &str, value: &str, ttl: Duration) {
        self.entries.lock().insert(
            key.to_string(),
            MockEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
    }

    fn check_online(&self) -> CacheResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable {
                message: "mock cache offline".to_string(),
            });
        }
        Ok(())
    }
}

impl ResultCache for MockResultCache {
    async fn ping(&self) -> CacheResult<()> {
        self.check_online()
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.check_online()?;
        self.gets.fetch_add(1, Ordering::SeqCst);

        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.check_online()?;
        self.insert_raw(key, value, ttl.max(Duration::from_secs(1)));
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        self.check_online()?;
        Ok(self.entries.lock().remove(key).is_some())
    }
}
