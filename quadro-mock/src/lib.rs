//! quadro-mock
//!
//! Mock connector for CI-safe tests and examples. Provides deterministic
//! data from static fixtures, plus scripted behavior for failure-path tests:
//! the identifier `FAIL` forces a connector error and `TIMEOUT` forces a
//! slow response.
#![warn(missing_docs)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use quadro_core::{Observation, ObservationSeries, SeriesConnector};
use quadro_types::{QuadroError, Source};

type FetchFn =
    dyn Fn(&str, Option<NaiveDate>) -> Result<ObservationSeries, QuadroError> + Send + Sync;

/// Mock connector with deterministic fixture data.
pub struct MockConnector {
    name: &'static str,
    source: Source,
    series: HashMap<String, ObservationSeries>,
    delay: Option<Duration>,
    fetch_fn: Option<Arc<FetchFn>>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector preloaded with the standard fixtures.
    #[must_use]
    pub fn new() -> Self {
        MockConnectorBuilder::new()
            .with_series(fixtures::unemployment_rate())
            .with_series(fixtures::real_gdp_growth())
            .build()
    }

    /// Start building a connector with custom series or behavior.
    #[must_use]
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    async fn maybe_fail_or_delay(&self, id: &str) -> Result<(), QuadroError> {
        if id == "FAIL" {
            return Err(QuadroError::source(self.source, "forced failure"));
        }
        // Keep the forced delay short to avoid slowing tests excessively.
        let delay = if id == "TIMEOUT" {
            Some(Duration::from_millis(200))
        } else {
            self.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }
}

#[async_trait]
impl SeriesConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn source(&self) -> Source {
        self.source
    }

    async fn observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        self.maybe_fail_or_delay(id).await?;

        if let Some(fetch_fn) = &self.fetch_fn {
            return fetch_fn(id, start);
        }

        let Some(series) = self.series.get(id) else {
            return Err(QuadroError::not_found(format!("series {id}")));
        };
        let points: Vec<Observation> = series
            .observations
            .iter()
            .copied()
            .filter(|o| start.is_none_or(|s| o.date >= s))
            .collect();
        Ok(
            ObservationSeries::new(series.id.clone(), series.name.clone(), self.source, points)
                .with_units(series.units.clone())
                .with_frequency(series.frequency.clone()),
        )
    }
}

/// Builder for [`MockConnector`].
pub struct MockConnectorBuilder {
    name: &'static str,
    source: Source,
    series: HashMap<String, ObservationSeries>,
    delay: Option<Duration>,
    fetch_fn: Option<Arc<FetchFn>>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnectorBuilder {
    /// Fresh builder with no fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "quadro-mock",
            source: Source::Mock,
            series: HashMap::new(),
            delay: None,
            fetch_fn: None,
        }
    }

    /// Override the connector name reported in logs.
    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Register the connector under a different source so it can stand in
    /// for a real provider in routing tests.
    #[must_use]
    pub const fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Add a fixture series, keyed by its id.
    #[must_use]
    pub fn with_series(mut self, series: ObservationSeries) -> Self {
        self.series.insert(series.id.clone(), series);
        self
    }

    /// Delay every response, for timeout tests.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Take full control of responses with a closure. Fixtures are ignored
    /// when set.
    #[must_use]
    pub fn with_fetch_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<NaiveDate>) -> Result<ObservationSeries, QuadroError>
            + Send
            + Sync
            + 'static,
    {
        self.fetch_fn = Some(Arc::new(f));
        self
    }

    /// Build the connector.
    #[must_use]
    pub fn build(self) -> MockConnector {
        MockConnector {
            name: self.name,
            source: self.source,
            series: self.series,
            delay: self.delay,
            fetch_fn: self.fetch_fn,
        }
    }
}
