use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::ObservationSeries;
use quadro_types::{QuadroError, Source};

/// Contract implemented by provider crates.
///
/// A connector turns a raw provider-side identifier into a normalized
/// [`ObservationSeries`]. Connectors report transport and payload failures
/// as `Err`; converting those into error-tagged series (so one failure never
/// affects sibling fetches) is the engine's job, and happens in exactly one
/// place there.
#[async_trait]
pub trait SeriesConnector: Send + Sync {
    /// A stable identifier for logs and diagnostics (e.g. "quadro-fred").
    fn name(&self) -> &'static str;

    /// The source this connector serves. The engine routes catalog entries
    /// tagged with this source to this connector.
    fn source(&self) -> Source;

    /// Fetch observations for `id`, optionally limited to dates at or after
    /// `start`.
    ///
    /// Implementations drop null/unparsable observations and normalize
    /// provider period labels to dates before returning, so every downstream
    /// component sees one date convention.
    ///
    /// # Errors
    /// Returns `NotFound` when the provider does not know the identifier and
    /// `Source`/`SourceTimeout`/`Data` for transport and payload failures.
    async fn observations(
        &self,
        id: &str,
        start: Option<NaiveDate>,
    ) -> Result<ObservationSeries, QuadroError>;
}
