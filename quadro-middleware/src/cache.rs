use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDate;
use lru::LruCache;
use tokio::sync::Mutex;

use quadro_core::{ObservationSeries, SeriesConnector};
use quadro_types::{CacheConfig, QuadroError, Source};

use crate::clock::{Clock, SystemClock};

/// Cache discrimination key: one entry per (identifier, requested start).
///
/// The source is implied: a store belongs to exactly one wrapped connector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    id: String,
    start: Option<NaiveDate>,
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

struct TtlStore<K, V> {
    inner: Mutex<LruCache<K, Entry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlStore<K, V>
where
    K: Clone + std::hash::Hash + Eq + Send + Sync,
    V: Clone + Send + Sync,
{
    fn new(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        // Avoid zero capacity panics
        let cap = capacity.max(1);
        let cap_nz = std::num::NonZeroUsize::new(cap).unwrap();
        Self {
            inner: Mutex::new(LruCache::new(cap_nz)),
            ttl,
            clock,
        }
    }

    async fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut guard = self.inner.lock().await;
        if let Some(entry) = guard.get_mut(key)
            && now <= entry.expires_at
        {
            return Some(entry.value.clone());
        }
        // If expired, remove it and return None
        guard.pop(key).and_then(|_| None)
    }

    async fn put(&self, key: K, value: V) {
        let expires_at = self.clock.now() + self.ttl;
        let mut guard = self.inner.lock().await;
        guard.put(key, Entry { value, expires_at });
    }
}

/// TTL read-through cache around any [`SeriesConnector`].
///
/// Expiry is checked on read only; there is no background sweep. Two tasks
/// that miss the same key concurrently will both refetch; the resulting
/// double write is idempotent, last-writer-wins. Failed fetches are never
/// cached, so a transient source outage does not poison the store.
pub struct CachingConnector {
    inner: Arc<dyn SeriesConnector>,
    store: TtlStore<SeriesKey, Arc<ObservationSeries>>,
}

impl CachingConnector {
    /// Wrap `inner` using the wall clock.
    #[must_use]
    pub fn new(inner: Arc<dyn SeriesConnector>, cfg: &CacheConfig) -> Self {
        Self::with_clock(inner, cfg, Arc::new(SystemClock))
    }

    /// Wrap `inner` with an explicit clock. Tests pass a
    /// [`crate::ManualClock`] here to drive expiry deterministically.
    #[must_use]
    pub fn with_clock(
        inner: Arc<dyn SeriesConnector>,
        cfg: &CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store = TtlStore::new(cfg.max_entries, cfg.ttl, clock);
        Self { inner, store }
    }
}

#[async_trait]
impl SeriesConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn source(&self) -> Source {
        self.inner.source()
    }

    async fn observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        let key = SeriesKey {
            id: id.to_string(),
            start,
        };
        if let Some(hit) = self.store.get(&key).await {
            tracing::debug!(source = %self.source(), id, "cache hit");
            return Ok((*hit).clone());
        }
        tracing::debug!(source = %self.source(), id, "cache miss");
        let value = self.inner.observations(id, start).await?;
        self.store.put(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}
