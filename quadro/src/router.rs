//! Catalog-routed fetching: single series and bounded concurrent
//! multi-series requests.

use std::collections::HashMap;

use chrono::{Months, NaiveDate, Utc};
use futures::stream::{self, StreamExt};

use quadro_core::ObservationSeries;
use quadro_types::{QuadroError, Source};

use crate::core::Quadro;

impl Quadro {
    /// The source a given identifier routes to: its catalog entry's source,
    /// or the configured default for unknown identifiers.
    #[must_use]
    pub fn routed_source(&self, id: &str) -> Source {
        self.catalog
            .lookup(id)
            .map_or(self.default_source, |meta| meta.source)
    }

    /// Fetch one series, routed through the catalog.
    ///
    /// Unknown identifiers are assumed to live on the default source, so
    /// callers can probe candidates that are not in the catalog. The
    /// returned series carries the caller-facing identifier and catalog
    /// display name, whatever the provider-side identifier was.
    ///
    /// # Errors
    /// `NotFound` when the routed source has no registered connector or the
    /// provider does not know the identifier; `SourceTimeout` when the
    /// configured per-source timeout elapses; `Source`/`Data` for transport
    /// and payload failures.
    pub async fn series(
        &self,
        id: &str,
        years: Option<u32>,
    ) -> Result<ObservationSeries, QuadroError> {
        let meta = self.catalog.lookup(id);
        let source = meta.map_or(self.default_source, |m| m.source);
        let remote_id = meta
            .and_then(|m| m.remote_id.clone())
            .unwrap_or_else(|| id.to_string());

        let Some(connector) = self.connectors.get(&source) else {
            return Err(QuadroError::not_found(format!(
                "no connector registered for source {source} (series {id})"
            )));
        };

        let start = years
            .or(self.cfg.default_years)
            .and_then(|y| years_back(Utc::now().date_naive(), y));

        tracing::debug!(id, %source, %remote_id, "routing series fetch");
        let fut = connector.observations(&remote_id, start);
        let mut series =
            Self::source_call_with_timeout(source, self.cfg.source_timeout, fut).await?;

        // Re-tag with the caller-facing identity; the connector only saw
        // the provider-side identifier.
        series.id = id.to_string();
        if let Some(meta) = meta {
            series.name = meta.name.clone();
        }
        Ok(series)
    }

    /// Fetch many series concurrently, bounded by the configured maximum.
    ///
    /// Every input identifier is present in the returned map, so "unknown
    /// id" is distinguishable from "found but empty": failures come back as
    /// error-tagged series, and one failing source never affects its
    /// siblings. Dropping the returned future cancels all in-flight
    /// fetches; there are no internal retries.
    pub async fn series_map(
        &self,
        ids: &[String],
        years: Option<u32>,
    ) -> HashMap<String, ObservationSeries> {
        let tasks = ids.iter().map(|id| {
            let source = self.routed_source(id);
            async move {
                let series = match self.series(id, years).await {
                    Ok(series) => series,
                    Err(err) => {
                        tracing::warn!(id = %id, %source, error = %err, "series fetch failed");
                        ObservationSeries::from_error(id.clone(), source, err)
                    }
                };
                (id.clone(), series)
            }
        });

        stream::iter(tasks)
            .buffer_unordered(self.cfg.max_concurrency.max(1))
            .collect()
            .await
    }
}

fn years_back(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years.saturating_mul(12)))
}
