//! Common data structures for economic time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quadro_types::Source;

/// A single dated data point in an economic series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date. Monthly and quarterly series use the convention
    /// established by [`crate::timeseries::period::normalize_period_label`].
    pub date: NaiveDate,
    /// Observed value in the series' native units.
    pub value: f64,
}

impl Observation {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A named, time-ordered economic data feed with provenance metadata.
///
/// Produced fresh by every fetch, cache hit, or transform. The constructor
/// guarantees observation dates are strictly increasing and unique; a series
/// that could not be fetched carries its failure in `error` instead of
/// being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSeries {
    /// Series identifier as the caller knows it (catalog key or raw code).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Ordered observations, strictly increasing by date.
    pub observations: Vec<Observation>,
    /// Which provider produced the data.
    pub source: Source,
    /// Native units as reported by the provider (e.g. "Percent").
    pub units: String,
    /// Native reporting frequency as reported by the provider.
    pub frequency: String,
    /// Failure description when the fetch did not succeed. An errored series
    /// always has zero observations.
    pub error: Option<String>,
}

impl ObservationSeries {
    /// Build a series from raw points, restoring the date invariant.
    ///
    /// Points are sorted by date and de-duplicated; when a provider reports
    /// the same date twice the later-listed value wins. This makes the
    /// invariant hold even for unordered or duplicated source payloads.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: Source,
        mut observations: Vec<Observation>,
    ) -> Self {
        observations.sort_by_key(|o| o.date);
        // Last write wins on duplicate dates; `dedup_by` keeps the first of a
        // run, so walk from the back.
        observations.reverse();
        observations.dedup_by_key(|o| o.date);
        observations.reverse();
        Self {
            id: id.into(),
            name: name.into(),
            observations,
            source,
            units: String::new(),
            frequency: String::new(),
            error: None,
        }
    }

    /// Build an empty, error-tagged series for a failed fetch.
    #[must_use]
    pub fn from_error(id: impl Into<String>, source: Source, error: impl ToString) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            observations: Vec::new(),
            source,
            units: String::new(),
            frequency: String::new(),
            error: Some(error.to_string()),
        }
    }

    /// Set the native units, builder-style.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set the native frequency, builder-style.
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Most recent observation, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Oldest observation, if any.
    #[must_use]
    pub fn earliest(&self) -> Option<&Observation> {
        self.observations.first()
    }
}

/// An absolute date range with a human-readable label.
///
/// Either bound may be open (`None`); containment is inclusive on both
/// bounds.
///
/// ```
/// use chrono::NaiveDate;
/// use quadro_core::DateSpan;
///
/// let span = DateSpan::new(
///     NaiveDate::from_ymd_opt(2020, 3, 1),
///     NaiveDate::from_ymd_opt(2021, 12, 31),
///     "COVID period",
/// );
/// assert!(span.contains(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()));
/// assert!(!span.contains(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// Inclusive lower bound; `None` means "from the beginning of time".
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound; `None` means "through the present".
    pub end: Option<NaiveDate>,
    /// Display label, e.g. "Pre-pandemic (Feb 2020)".
    pub label: String,
}

impl DateSpan {
    /// Construct a span from optional bounds and a label.
    #[must_use]
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// A span open at both ends.
    #[must_use]
    pub fn unbounded(label: impl Into<String>) -> Self {
        Self::new(None, None, label)
    }

    /// Inclusive containment test against both bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start
            && date < start
        {
            return false;
        }
        if let Some(end) = self.end
            && date > end
        {
            return false;
        }
        true
    }
}
