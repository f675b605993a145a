use quotis_shared::StatsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Process-wide request counters, updated from every in-flight request.
/// Owned by the service instance rather than living in a static so tests
/// get a fresh set per service.
#[derive(Debug, Default)]
pub struct ServiceStats {
    total_requests: AtomicU64,
    cache_hits: AtomicU64,
    total_compute_time_ms: AtomicU64,
    error_count: AtomicU64,
    recommendations_generated: AtomicU64,
}

impl ServiceStats {
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_compute_time(&self, elapsed: Duration) {
        self.total_compute_time_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_recommendation(&self) {
        self.recommendations_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            total_compute_time_ms: self.total_compute_time_ms.load(Ordering::Relaxed),
            error_count: self.error_count.load(Ordering::Relaxed),
            recommendations_generated: self.recommendations_generated.load(Ordering::Relaxed),
        }
    }
}
