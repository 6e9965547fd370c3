#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use quadro::{Observation, ObservationSeries, Quadro, QuadroError, SeriesConnector, Source};
use quadro_mock::{MockConnector, fixtures};

/// Fixed "today" so intent resolution is deterministic across test runs.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Engine with the standard fixtures registered as the FRED-style source.
pub fn engine() -> Quadro {
    let mock = MockConnector::builder()
        .source(Source::Fred)
        .with_series(fixtures::unemployment_rate())
        .with_series(fixtures::real_gdp_growth())
        .build();
    Quadro::builder()
        .with_connector(Arc::new(mock))
        .build()
        .expect("engine builds")
}

/// A short series that only starts in 2022; useful for unfulfillable
/// pre-pandemic comparisons.
pub fn short_series(id: &str) -> ObservationSeries {
    let points = (1..=12u32)
        .map(|m| Observation::new(d(2022, m, 1), 10.0 + f64::from(m)))
        .chain((1..=12u32).map(|m| Observation::new(d(2023, m, 1), 22.0 + f64::from(m))))
        .collect();
    ObservationSeries::new(id, id, Source::Mock, points).with_units("Index")
}

/// Connector that records the maximum number of concurrently in-flight
/// fetches it ever observed.
pub struct GaugeConnector {
    source: Source,
    in_flight: AtomicUsize,
    max_in_flight: Arc<AtomicUsize>,
}

impl GaugeConnector {
    pub fn new(source: Source, max_in_flight: Arc<AtomicUsize>) -> Self {
        Self {
            source,
            in_flight: AtomicUsize::new(0),
            max_in_flight,
        }
    }
}

#[async_trait]
impl SeriesConnector for GaugeConnector {
    fn name(&self) -> &'static str {
        "gauge"
    }

    fn source(&self) -> Source {
        self.source
    }

    async fn observations(
        &self,
        id: &str,
        _start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(25)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(ObservationSeries::new(
            id,
            id,
            self.source,
            vec![Observation::new(d(2024, 1, 1), 1.0)],
        ))
    }
}
