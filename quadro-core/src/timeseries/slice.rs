use chrono::NaiveDate;

use crate::types::{DateSpan, Observation, ObservationSeries};

/// Extract the observations of `series` that fall inside `span`, inclusive
/// on both bounds.
///
/// An empty result is meaningful: it tells the validator the series has no
/// data for that period, and no placeholder is ever fabricated for it.
#[must_use]
pub fn slice_span(series: &ObservationSeries, span: &DateSpan) -> Vec<Observation> {
    series
        .observations
        .iter()
        .copied()
        .filter(|o| span.contains(o.date))
        .collect()
}

/// How to collapse a period's observations into a single representative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum SummaryMethod {
    /// Most recent observation in the period. The default: point-to-point
    /// comparisons are reproducible and match how headline figures are
    /// quoted.
    #[default]
    Latest,
    /// First observation in the period.
    First,
    /// Arithmetic mean of the period's values, dated at the period's last
    /// observation.
    Average,
    /// Observation with the smallest value.
    Min,
    /// Observation with the largest value.
    Max,
}

/// Collapse `points` into a single `(date, value)` per `method`.
///
/// Returns `None` for an empty period; callers treat absence as the signal
/// that no comparison is possible, never substituting a zero.
#[must_use]
pub fn summarize(points: &[Observation], method: SummaryMethod) -> Option<(NaiveDate, f64)> {
    if points.is_empty() {
        return None;
    }
    let picked = match method {
        SummaryMethod::Latest => *points.last()?,
        SummaryMethod::First => *points.first()?,
        SummaryMethod::Average => {
            let mean = points.iter().map(|o| o.value).sum::<f64>() / points.len() as f64;
            return Some((points.last()?.date, mean));
        }
        SummaryMethod::Min => *points
            .iter()
            .min_by(|a, b| a.value.total_cmp(&b.value))?,
        SummaryMethod::Max => *points
            .iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))?,
    };
    Some((picked.date, picked.value))
}
