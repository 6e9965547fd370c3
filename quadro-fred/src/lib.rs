//! quadro-fred
//!
//! FRED connector: fetches observation series by short alphanumeric code
//! from a FRED-style REST/JSON API and normalizes them into the common
//! [`ObservationSeries`] shape. Missing observations (the API reports them
//! as the literal `"."`) are dropped, and a companion series-info request
//! fills in units, frequency, and the display title when available.
#![warn(missing_docs)]

mod builder;
mod model;

use async_trait::async_trait;
use chrono::NaiveDate;

use quadro_core::{Observation, ObservationSeries, SeriesConnector};
use quadro_types::{QuadroError, Source};

pub use builder::FredConnectorBuilder;

use model::{FredObservationsResponse, FredSeriesInfoResponse};

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Connector for a FRED-style provider.
pub struct FredConnector {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FredConnector {
    /// Start building a connector. An API key is required; the base URL
    /// defaults to the production endpoint.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> FredConnectorBuilder {
        FredConnectorBuilder::new(api_key)
    }

    pub(crate) fn from_parts(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    async fn fetch_observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<FredObservationsResponse, QuadroError> {
        let url = format!("{}/series/observations", self.base_url);
        let mut query = vec![
            ("series_id", id.to_string()),
            ("api_key", self.api_key.clone()),
            ("file_type", "json".to_string()),
        ];
        if let Some(start) = start {
            query.push(("observation_start", start.format("%Y-%m-%d").to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::BAD_REQUEST {
            // FRED answers 400 for unknown series ids.
            return Err(QuadroError::not_found(format!("series {id}")));
        }
        if !status.is_success() {
            return Err(QuadroError::source(
                Source::Fred,
                format!("HTTP {status} for {id}"),
            ));
        }

        resp.json::<FredObservationsResponse>()
            .await
            .map_err(|e| QuadroError::Data(format!("malformed observations payload: {e}")))
    }

    /// Series metadata is best-effort: a failure here degrades the result
    /// (empty units/frequency) instead of failing the fetch.
    async fn fetch_series_info(&self, id: &str) -> Option<FredSeriesInfoResponse> {
        let url = format!("{}/series", self.base_url);
        let query = [
            ("series_id", id.to_string()),
            ("api_key", self.api_key.clone()),
            ("file_type", "json".to_string()),
        ];
        let result = async {
            self.client
                .get(&url)
                .query(&query)
                .send()
                .await
                .ok()?
                .error_for_status()
                .ok()?
                .json::<FredSeriesInfoResponse>()
                .await
                .ok()
        }
        .await;
        if result.is_none() {
            tracing::warn!(id, "series info request failed; continuing without metadata");
        }
        result
    }
}

#[async_trait]
impl SeriesConnector for FredConnector {
    fn name(&self) -> &'static str {
        "quadro-fred"
    }

    fn source(&self) -> Source {
        Source::Fred
    }

    async fn observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        tracing::debug!(id, ?start, "fetching FRED observations");
        let payload = self.fetch_observations(id, start).await?;
        let info = self.fetch_series_info(id).await;

        let points: Vec<Observation> = payload
            .observations
            .iter()
            .filter_map(|obs| {
                // "." marks a missing observation; anything unparsable is
                // treated the same way.
                let value: f64 = obs.value.parse().ok()?;
                let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d").ok()?;
                Some(Observation::new(date, value))
            })
            .collect();

        let info = info.and_then(|i| i.seriess.into_iter().next());
        let title = info
            .as_ref()
            .map_or_else(|| id.to_string(), |i| i.title.clone());
        let series = ObservationSeries::new(id, title, Source::Fred, points)
            .with_units(info.as_ref().map(|i| i.units.clone()).unwrap_or_default())
            .with_frequency(info.map(|i| i.frequency).unwrap_or_default());
        Ok(series)
    }
}

fn map_transport_error(e: reqwest::Error) -> QuadroError {
    if e.is_timeout() {
        QuadroError::source_timeout(Source::Fred)
    } else {
        QuadroError::source(Source::Fred, e.to_string())
    }
}
