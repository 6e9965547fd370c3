//! Series catalog: the read-only registry mapping identifiers to sources,
//! display transforms, and keywords.
//!
//! The catalog is pure data. It is built once at startup from the static
//! table in [`builtin`], optionally merged with externally supplied
//! query-plan tables, and consulted behind read-only accessors from then on.

mod builtin;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use quadro_types::{QuadroError, Source};

/// Broad subject grouping for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Category {
    /// Labor-market series (payrolls, unemployment, participation).
    Employment,
    /// Price-level and inflation series.
    Inflation,
    /// Output and growth series.
    Gdp,
    /// Policy and market interest rates.
    Rates,
    /// Housing construction, prices, and financing.
    Housing,
    /// Wage and earnings series.
    Wages,
    /// Business activity and credit.
    Business,
    /// Household spending, saving, and sentiment.
    Consumer,
    /// Industrial and manufacturing activity.
    Manufacturing,
}

/// How the presentation layer should display a series.
///
/// A hint only: the engine never applies transforms on fetch, it hands the
/// raw series plus this tag downstream (the transforms themselves live in
/// `quadro_core::timeseries::transform`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DisplayTransform {
    /// Already a rate; show as-is.
    Rate,
    /// A level; show as-is.
    Level,
    /// A level or index best shown as year-over-year percent change.
    YoyPercent,
    /// A level best shown as period-over-period change.
    Change,
}

/// What kind of quantity a series measures. Used by consumers to judge unit
/// compatibility when comparing series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Measure {
    /// Inflation-adjusted quantity.
    Real,
    /// Current-dollar quantity.
    Nominal,
    /// A rate or ratio.
    Rate,
    /// An index level.
    Index,
}

/// How a series' values already relate to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Change {
    /// Year-over-year change.
    Yoy,
    /// Quarter-over-quarter change.
    Qoq,
    /// Month-over-month change.
    Mom,
    /// Plain level.
    Level,
}

/// Immutable metadata for one series, registered once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    /// Identifier as callers know it (FRED code or internal key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Backing provider.
    pub source: Source,
    /// Subject grouping.
    pub category: Category,
    /// Display-transform hint for the presentation layer.
    pub display: DisplayTransform,
    /// Keywords matched by [`Catalog::search`].
    pub keywords: Vec<String>,
    /// Provider-side identifier when it differs from `id` (hierarchical
    /// DBnomics codes).
    pub remote_id: Option<String>,
    /// Measure classification, when known.
    pub measure: Option<Measure>,
    /// Change classification, when known.
    pub change: Option<Change>,
    /// Native frequency, when known ahead of fetching.
    pub frequency: Option<String>,
}

impl SeriesMetadata {
    /// Minimal constructor; optional fields are filled builder-style.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: Source,
        category: Category,
        display: DisplayTransform,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source,
            category,
            display,
            keywords: Vec::new(),
            remote_id: None,
            measure: None,
            change: None,
            frequency: None,
        }
    }

    /// Attach search keywords.
    #[must_use]
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(ToString::to_string).collect();
        self
    }

    /// Attach the provider-side identifier.
    #[must_use]
    pub fn remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Attach the measure classification.
    #[must_use]
    pub const fn measure(mut self, measure: Measure) -> Self {
        self.measure = Some(measure);
        self
    }

    /// Attach the change classification.
    #[must_use]
    pub const fn change(mut self, change: Change) -> Self {
        self.change = Some(change);
        self
    }

    /// Attach the native frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }
}

/// A pre-computed query plan: a phrase mapped to candidate series ids.
///
/// Plans are configuration supplied by the surrounding application and
/// consulted only as an optional fast-path; nothing in the engine requires
/// them for correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    /// Candidate series identifiers, in preference order.
    pub series: Vec<String>,
    /// Whether the presentation layer should prefer a YoY rendering.
    #[serde(default)]
    pub show_yoy: bool,
    /// Whether the candidates belong on one combined chart.
    #[serde(default)]
    pub combine_chart: bool,
    /// Why these series answer the phrase.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Read-only registry of series metadata and query plans.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, SeriesMetadata>,
    plans: HashMap<String, QueryPlan>,
}

impl Catalog {
    /// Empty catalog, for callers that register everything themselves.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table: core US series plus international series.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for meta in builtin::builtin_series() {
            catalog.insert(meta);
        }
        catalog
    }

    /// Register one series. Later registrations replace earlier ones with
    /// the same id.
    pub fn insert(&mut self, meta: SeriesMetadata) {
        self.entries.insert(meta.id.clone(), meta);
    }

    /// Merge a JSON object of `phrase -> plan` into the plan table.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the payload is not a map of plans.
    pub fn merge_plans_json(&mut self, json: &str) -> Result<usize, QuadroError> {
        let plans: HashMap<String, QueryPlan> = serde_json::from_str(json)
            .map_err(|e| QuadroError::InvalidArg(format!("malformed plan table: {e}")))?;
        let merged = plans.len();
        for (phrase, plan) in plans {
            self.plans.insert(phrase.to_lowercase(), plan);
        }
        Ok(merged)
    }

    /// Look up a series by id. A miss is an expected outcome, not an error:
    /// callers routinely probe several candidate identifiers.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&SeriesMetadata> {
        self.entries.get(id)
    }

    /// Series whose keywords contain `keyword` (case-insensitive substring),
    /// ordered by id for determinism.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&SeriesMetadata> {
        let needle = keyword.to_lowercase();
        let mut matches: Vec<&SeriesMetadata> = self
            .entries
            .values()
            .filter(|meta| meta.keywords.iter().any(|kw| kw.contains(&needle)))
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    /// All series in a category, ordered by id.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&SeriesMetadata> {
        let mut matches: Vec<&SeriesMetadata> = self
            .entries
            .values()
            .filter(|meta| meta.category == category)
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    /// Find a plan for a query: exact phrase match first, then substring
    /// containment in either direction.
    #[must_use]
    pub fn plan_for(&self, query: &str) -> Option<&QueryPlan> {
        let query = query.to_lowercase();
        let query = query.trim();
        if let Some(plan) = self.plans.get(query) {
            return Some(plan);
        }
        // Deterministic tie-break: prefer the longest matching phrase.
        self.plans
            .iter()
            .filter(|(phrase, _)| query.contains(phrase.as_str()) || phrase.contains(query))
            .max_by_key(|(phrase, _)| phrase.len())
            .map(|(_, plan)| plan)
    }

    /// Number of registered series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no series are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
