use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Default lifetime of a resolved region.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct Entry {
    resolved_at: Instant,
    last_used: u64,
    work_region: String,
}

struct Inner {
    entries: HashMap<String, Entry>,
    tick: u64,
}

/// Work region per job id, shared by all enrichment tasks.
///
/// Entries older than the TTL read as absent. The map never holds more than
/// `capacity` ids: expired entries are swept first, then the least recently
/// used entry is evicted.
pub struct RegionCache {
    ttl: Duration,
    capacity: usize,
    inner: Mutex<Inner>,
}

impl RegionCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                tick: 0,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached region for `job_id` if it has not expired.
    pub fn get(&self, job_id: &str) -> Option<String> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.tick += 1;
        let tick = inner.tick;
        let ttl = self.ttl;

        let entry = inner.entries.get_mut(job_id)?;
        if entry.resolved_at.elapsed() >= ttl {
            return None;
        }
        entry.last_used = tick;
        Some(entry.work_region.clone())
    }

    /// Store the region for `job_id`, overwriting any previous entry.
    pub fn insert(&self, job_id: &str, work_region: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.tick += 1;
        let tick = inner.tick;

        if !inner.entries.contains_key(job_id) && inner.entries.len() >= self.capacity {
            let ttl = self.ttl;
            inner
                .entries
                .retain(|_, entry| entry.resolved_at.elapsed() < ttl);

            if inner.entries.len() >= self.capacity {
                let oldest = inner
                    .entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_used)
                    .map(|(id, _)| id.clone());
                if let Some(oldest) = oldest {
                    inner.entries.remove(&oldest);
                }
            }
        }

        inner.entries.insert(
            job_id.to_string(),
            Entry {
                resolved_at: Instant::now(),
                last_used: tick,
                work_region: work_region.to_string(),
            },
        );
        metrics::gauge!("region_cache_entries").set(inner.entries.len() as f64);
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegionCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, 10_000)
    }
}
