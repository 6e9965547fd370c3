use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use quadro_core::{Observation, ObservationSeries, SeriesConnector};
use quadro_middleware::{CachingConnector, ManualClock};
use quadro_types::{CacheConfig, QuadroError, Source};

/// Counts transport calls so tests can observe hits vs. refetches.
struct CountingConnector {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingConnector {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeriesConnector for CountingConnector {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn source(&self) -> Source {
        Source::Mock
    }

    async fn observations(
        &self,
        id: &str,
        _start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(QuadroError::source(Source::Mock, "forced failure"));
        }
        Ok(ObservationSeries::new(
            id,
            id,
            Source::Mock,
            vec![Observation::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                1.0,
            )],
        ))
    }
}

fn cfg(ttl: Duration) -> CacheConfig {
    CacheConfig {
        ttl,
        max_entries: 16,
    }
}

#[tokio::test]
async fn second_fetch_within_ttl_hits_cache() {
    let inner = Arc::new(CountingConnector::new());
    let clock = Arc::new(ManualClock::new());
    let cached = CachingConnector::with_clock(
        inner.clone(),
        &cfg(Duration::from_secs(1800)),
        clock.clone(),
    );

    let first = cached.observations("UNRATE", None).await.unwrap();
    let second = cached.observations("UNRATE", None).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(inner.calls(), 1, "second fetch must not hit transport");
}

#[tokio::test]
async fn fetch_after_expiry_refetches() {
    let inner = Arc::new(CountingConnector::new());
    let clock = Arc::new(ManualClock::new());
    let cached = CachingConnector::with_clock(
        inner.clone(),
        &cfg(Duration::from_secs(1800)),
        clock.clone(),
    );

    cached.observations("UNRATE", None).await.unwrap();
    clock.advance(Duration::from_secs(1801));
    cached.observations("UNRATE", None).await.unwrap();
    assert_eq!(inner.calls(), 2, "expired entry must trigger a fresh call");
}

#[tokio::test]
async fn expired_entries_are_never_returned_at_the_boundary() {
    let inner = Arc::new(CountingConnector::new());
    let clock = Arc::new(ManualClock::new());
    let cached =
        CachingConnector::with_clock(inner.clone(), &cfg(Duration::from_secs(60)), clock.clone());

    cached.observations("UNRATE", None).await.unwrap();
    // Exactly at the TTL the entry is still fresh; one tick past, it is not.
    clock.advance(Duration::from_secs(60));
    cached.observations("UNRATE", None).await.unwrap();
    assert_eq!(inner.calls(), 1);
    clock.advance(Duration::from_secs(1));
    cached.observations("UNRATE", None).await.unwrap();
    assert_eq!(inner.calls(), 2);
}

#[tokio::test]
async fn distinct_start_dates_are_distinct_entries() {
    let inner = Arc::new(CountingConnector::new());
    let clock = Arc::new(ManualClock::new());
    let cached = CachingConnector::with_clock(
        inner.clone(),
        &cfg(Duration::from_secs(1800)),
        clock.clone(),
    );

    let start = NaiveDate::from_ymd_opt(2020, 1, 1);
    cached.observations("UNRATE", None).await.unwrap();
    cached.observations("UNRATE", start).await.unwrap();
    assert_eq!(inner.calls(), 2, "different ranges must not share an entry");
}

#[tokio::test]
async fn failures_are_not_cached() {
    let inner = Arc::new(CountingConnector::failing());
    let clock = Arc::new(ManualClock::new());
    let cached = CachingConnector::with_clock(
        inner.clone(),
        &cfg(Duration::from_secs(1800)),
        clock.clone(),
    );

    assert!(cached.observations("UNRATE", None).await.is_err());
    assert!(cached.observations("UNRATE", None).await.is_err());
    assert_eq!(inner.calls(), 2, "errors must be retried, not replayed");
}
