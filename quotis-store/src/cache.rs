use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    #[allow(dead_code)]
    inserted_at: Instant,
    expires_at: Instant,
    // Identifies this insertion so a stale sweep never removes a newer
    // entry written under the same key.
    seq: u64,
}

/// Concurrency-safe TTL cache backed by a lock-striped map.
///
/// Every `put` schedules exactly one deferred removal so entries are
/// reclaimed even when never read again; `get` still checks `expires_at`
/// as a safety net for the window between nominal expiry and the sweep.
pub struct TieredCache<T> {
    name: &'static str,
    entries: Arc<DashMap<String, CacheEntry<T>>>,
    seq: AtomicU64,
    hits: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> TieredCache<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Arc::new(DashMap::new()),
            seq: AtomicU64::new(0),
            hits: AtomicU64::new(0),
        }
    }

    /// Fresh value for the key, or `None` for missing and expired-but-not-
    /// yet-swept entries alike. Stale entries found here are removed
    /// eagerly.
    pub fn get(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            let stale_seq = entry.seq;
            drop(entry);
            self.entries.remove_if(key, |_, e| e.seq == stale_seq);
            return None;
        }
        let value = entry.value.clone();
        drop(entry);
        self.hits.fetch_add(1, Ordering::Relaxed);
        Some(value)
    }

    /// Insert (replacing any previous entry) and schedule the removal that
    /// enforces `ttl`.
    pub fn put(&self, key: String, value: T, ttl: Duration) {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let now = Instant::now();
        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                inserted_at: now,
                expires_at: now + ttl,
                seq,
            },
        );

        let entries = Arc::clone(&self.entries);
        let name = self.name;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if entries.remove_if(&key, |_, e| e.seq == seq).is_some() {
                debug!(cache = name, key = %key, "evicted expired entry");
            }
        });
    }

    /// Drop every entry. Pending sweeps for the dropped entries become
    /// no-ops; calling this twice is harmless.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
}
