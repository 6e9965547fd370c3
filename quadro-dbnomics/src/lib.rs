//! quadro-dbnomics
//!
//! DBnomics connector: fetches observation series by hierarchical
//! `provider/dataset/series` code from a DBnomics-style REST/JSON API.
//! The provider reports periodic labels ("2024", "2024-Q1", "2024-01");
//! this connector normalizes them to dates once, here, and drops null
//! observations, so every downstream component sees one clean shape.
#![warn(missing_docs)]

mod builder;
mod model;

use async_trait::async_trait;
use chrono::NaiveDate;

use quadro_core::{Observation, ObservationSeries, SeriesConnector, normalize_period_label};
use quadro_types::{QuadroError, Source};

pub use builder::DbnomicsConnectorBuilder;

use model::DbnomicsResponse;

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.db.nomics.world/v22";

/// Connector for a DBnomics-style provider.
pub struct DbnomicsConnector {
    client: reqwest::Client,
    base_url: String,
}

impl DbnomicsConnector {
    /// Start building a connector against the production endpoint.
    #[must_use]
    pub fn builder() -> DbnomicsConnectorBuilder {
        DbnomicsConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SeriesConnector for DbnomicsConnector {
    fn name(&self) -> &'static str {
        "quadro-dbnomics"
    }

    fn source(&self) -> Source {
        Source::Dbnomics
    }

    async fn observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError> {
        tracing::debug!(id, "fetching DBnomics observations");
        let url = format!("{}/series/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .query(&[("observations", "1")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(QuadroError::not_found(format!("series {id}")));
        }
        if !status.is_success() {
            return Err(QuadroError::source(
                Source::Dbnomics,
                format!("HTTP {status} for {id}"),
            ));
        }

        let payload = resp
            .json::<DbnomicsResponse>()
            .await
            .map_err(|e| QuadroError::Data(format!("malformed series payload: {e}")))?;

        let Some(doc) = payload.series.docs.into_iter().next() else {
            return Err(QuadroError::not_found(format!("series {id}")));
        };

        let points: Vec<Observation> = doc
            .period
            .iter()
            .zip(doc.value.iter())
            .filter_map(|(period, value)| {
                // Null values and unrecognized period labels are dropped.
                let value = (*value)?;
                let date = normalize_period_label(period)?;
                Some(Observation::new(date, value))
            })
            .filter(|obs| start.is_none_or(|s| obs.date >= s))
            .collect();

        let name = if doc.series_name.is_empty() {
            id.to_string()
        } else {
            doc.series_name
        };
        let series = ObservationSeries::new(id, name, Source::Dbnomics, points)
            .with_units(doc.unit)
            .with_frequency(doc.frequency);
        Ok(series)
    }
}

fn map_transport_error(e: reqwest::Error) -> QuadroError {
    if e.is_timeout() {
        QuadroError::source_timeout(Source::Dbnomics)
    } else {
        QuadroError::source(Source::Dbnomics, e.to_string())
    }
}
