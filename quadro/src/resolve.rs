//! The end-to-end resolution pipeline.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Quadro;
use crate::extract::{MultiPeriodData, extract_periods};
use crate::intent::{TemporalIntent, resolve_intent};
use crate::validate::{ValidationResult, self_correct, validate};

/// Everything a resolved query produces, handed to the presentation layer
/// as plain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResolution {
    /// The intent the result actually satisfies. When self-correction
    /// fired, this is the replacement intent, not the originally detected
    /// one.
    pub intent: TemporalIntent,
    /// Fetched data, period slices, and comparison metrics.
    pub data: MultiPeriodData,
    /// Validation findings against the *original* intent.
    pub validation: ValidationResult,
    /// The user-facing note explaining a self-correction, when one fired.
    pub correction_note: Option<String>,
}

impl Quadro {
    /// Resolve a query end to end: classify its temporal intent, fetch full
    /// history for the candidate identifiers, slice and compare, validate,
    /// and self-correct at most once.
    ///
    /// `candidate_ids` comes from the upstream query-understanding layer.
    /// When it is empty, the catalog's plan table is consulted as a
    /// fast-path; with no plan either, the resolution carries no data and
    /// validation reflects that.
    pub async fn resolve(
        &self,
        query: &str,
        candidate_ids: &[String],
        years: Option<u32>,
    ) -> QueryResolution {
        self.resolve_at(query, candidate_ids, years, Utc::now().date_naive())
            .await
    }

    /// [`resolve`](Self::resolve) with an explicit "today", so intent
    /// resolution is deterministic under test.
    pub async fn resolve_at(
        &self,
        query: &str,
        candidate_ids: &[String],
        years: Option<u32>,
        today: NaiveDate,
    ) -> QueryResolution {
        let intent = resolve_intent(query, today);

        let planned: Vec<String>;
        let ids: &[String] = if candidate_ids.is_empty() {
            planned = self
                .catalog
                .plan_for(query)
                .map(|plan| plan.series.clone())
                .unwrap_or_default();
            &planned
        } else {
            candidate_ids
        };

        // Comparisons need the full range; fetching less would amputate the
        // reference period.
        let full = self.series_map(ids, years).await;
        let data = extract_periods(&intent, full);
        let validation = validate(&intent, &data);

        let (intent, correction_note) = match self_correct(&validation, &intent, &data) {
            Some((corrected, note)) => {
                tracing::warn!(query, note = %note, "self-corrected unfulfillable comparison");
                (corrected, Some(note))
            }
            None => (intent, None),
        };

        QueryResolution {
            intent,
            data,
            validation,
            correction_note,
        }
    }
}
