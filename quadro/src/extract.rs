//! Multi-period extraction and comparison metrics.
//!
//! Given a compare intent and full per-series history, slices each series
//! into primary and reference sub-ranges and computes a point-to-point
//! comparison metric from the most recent observation in each. A series
//! with an empty sub-range on either side contributes no metric: absence,
//! not a placeholder, is the signal the validator relies on.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quadro_core::{Observation, ObservationSeries, SummaryMethod, slice_span, summarize};

use crate::intent::{IntentKind, TemporalIntent};

/// Changes smaller than this are reported as flat.
pub const FLAT_EPSILON: f64 = 0.01;

/// Sign of a comparison's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The primary value is higher than the reference value.
    Up,
    /// The primary value is lower than the reference value.
    Down,
    /// The change is smaller than [`FLAT_EPSILON`] in magnitude.
    Flat,
}

/// Computed comparison between two time periods for a single series.
///
/// For unemployment at 4.1 now vs. 3.5 pre-pandemic: absolute change 0.6,
/// percent change ~17.1, direction up. Computed once; immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetric {
    /// Series identifier.
    pub series_id: String,
    /// Series display name.
    pub series_name: String,
    /// Most recent value in the primary period.
    pub primary_value: f64,
    /// Most recent value in the reference period.
    pub reference_value: f64,
    /// Date of the primary value.
    pub primary_date: NaiveDate,
    /// Date of the reference value.
    pub reference_date: NaiveDate,
    /// `primary_value - reference_value`.
    pub absolute_change: f64,
    /// Percent change relative to the reference value; zero when the
    /// reference value is zero, never NaN or infinite.
    pub percent_change: f64,
    /// Sign classification of the change.
    pub direction: Direction,
    /// Native units, for display.
    pub units: String,
    /// Display label, e.g. "vs Pre-pandemic (Feb 2020)".
    pub period_label: String,
}

impl fmt::Display for ComparisonMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.absolute_change >= 0.0 { "+" } else { "" };
        write!(
            f,
            "{}: {:.2} ({}{:.2}, {}{:.1}%) {}",
            self.series_name,
            self.primary_value,
            sign,
            self.absolute_change,
            sign,
            self.percent_change,
            self.period_label
        )
    }
}

/// Data extracted for one resolved query: the full history per series plus,
/// for compare intents, the period slices and computed metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiPeriodData {
    /// Complete fetched history, unfiltered (consumers chart this).
    pub full: HashMap<String, ObservationSeries>,
    /// Primary-period slice per series.
    pub primary: HashMap<String, Vec<Observation>>,
    /// Reference-period slice per series.
    pub reference: HashMap<String, Vec<Observation>>,
    /// Comparison metrics, keyed by series id. Only series with data in
    /// both periods appear here.
    pub metrics: HashMap<String, ComparisonMetric>,
    /// Display label for the primary period.
    pub primary_label: String,
    /// Display label for the reference period.
    pub reference_label: String,
}

impl MultiPeriodData {
    /// True when at least one series yielded a usable comparison.
    #[must_use]
    pub fn has_comparison_data(&self) -> bool {
        !self.metrics.is_empty()
    }

    /// Comparison metric for one series, if it produced one.
    #[must_use]
    pub fn metric(&self, series_id: &str) -> Option<&ComparisonMetric> {
        self.metrics.get(series_id)
    }
}

/// Slice fetched history per the intent and compute comparison metrics.
///
/// For filter and current intents only the full data is carried through;
/// slicing a filter window is the consumer's rendering decision and no
/// metrics apply.
#[must_use]
pub fn extract_periods(
    intent: &TemporalIntent,
    full: HashMap<String, ObservationSeries>,
) -> MultiPeriodData {
    let IntentKind::Compare { primary, reference } = &intent.kind else {
        return MultiPeriodData {
            full,
            primary_label: "Current".to_string(),
            reference_label: String::new(),
            ..Default::default()
        };
    };

    let mut data = MultiPeriodData {
        full,
        primary_label: primary.label.clone(),
        reference_label: reference.label.clone(),
        ..Default::default()
    };

    for (id, series) in &data.full {
        if series.is_empty() || series.error.is_some() {
            continue;
        }
        let primary_points = slice_span(series, primary);
        let reference_points = slice_span(series, reference);

        if let Some(metric) = compute_metric(
            series,
            &primary_points,
            &reference_points,
            &reference.label,
        ) {
            data.metrics.insert(id.clone(), metric);
        }
        data.primary.insert(id.clone(), primary_points);
        data.reference.insert(id.clone(), reference_points);
    }

    data
}

/// Point-to-point metric from the most recent observation in each period.
///
/// Returns `None` when either period is empty.
fn compute_metric(
    series: &ObservationSeries,
    primary_points: &[Observation],
    reference_points: &[Observation],
    reference_label: &str,
) -> Option<ComparisonMetric> {
    let (primary_date, primary_value) = summarize(primary_points, SummaryMethod::Latest)?;
    let (reference_date, reference_value) = summarize(reference_points, SummaryMethod::Latest)?;

    let absolute_change = primary_value - reference_value;
    let percent_change = if reference_value == 0.0 {
        0.0
    } else {
        absolute_change / reference_value.abs() * 100.0
    };
    let direction = if absolute_change.abs() < FLAT_EPSILON {
        Direction::Flat
    } else if absolute_change > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    Some(ComparisonMetric {
        series_id: series.id.clone(),
        series_name: series.name.clone(),
        primary_value,
        reference_value,
        primary_date,
        reference_date,
        absolute_change,
        percent_change,
        direction,
        units: series.units.clone(),
        period_label: if reference_label.is_empty() {
            String::new()
        } else {
            format!("vs {reference_label}")
        },
    })
}
