//! Temporal intent resolution.
//!
//! Classifies a free-text query into one of three terminal shapes and
//! resolves named historical eras into absolute date bounds:
//!
//! - **Compare** — "since pre-pandemic", "vs 2019": the caller wants current
//!   data measured *against* a reference period, so both periods are needed.
//! - **Filter** — "in 2022", "during the great recession": the caller wants
//!   one absolute window.
//! - **Current** — anything without a temporal reference.
//!
//! Compare rules are evaluated strictly before filter rules; the fix this
//! ordering encodes is real, not stylistic — "compare to pre-pandemic" once
//! filtered *to* February 2020 instead of comparing against it.
//!
//! Resolution takes `today` explicitly, so a fixed query string resolves to
//! identical bounds every time.

mod periods;
mod rules;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use quadro_core::DateSpan;

/// Which aspect of a comparison the caller emphasized. Affects downstream
/// presentation emphasis only, never which data is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ComparisonKind {
    /// Compare the levels themselves.
    #[default]
    Level,
    /// Emphasize the absolute change.
    Change,
    /// Emphasize the percent change.
    Percent,
}

/// The classified temporal shape of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IntentKind {
    /// Measure current data against a historical reference period.
    ///
    /// The primary span starts exactly at the reference span's end date, so
    /// an observation dated exactly at the boundary can land in both
    /// sub-ranges. Tolerated: the alternative (a gap) is worse for sparse
    /// series.
    Compare {
        /// The "now" window, open-ended to the present.
        primary: DateSpan,
        /// The historical reference window. Always present for a compare
        /// intent.
        reference: DateSpan,
    },
    /// Restrict to one absolute window, no reference period.
    Filter {
        /// The requested window.
        span: DateSpan,
    },
    /// No temporal reference; show recent data.
    Current,
}

/// A query's resolved temporal intent. Immutable; self-correction replaces
/// the whole value, it never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalIntent {
    /// The classified shape.
    #[serde(flatten)]
    pub kind: IntentKind,
    /// Secondary emphasis classification.
    pub comparison: ComparisonKind,
    /// Classifier confidence in [0, 1]. Pattern matches are certain; the
    /// no-match fallback to Current is not.
    pub confidence: f64,
    /// Human-readable account of the classification.
    pub explanation: String,
}

impl TemporalIntent {
    /// A Current intent with full confidence, used for explicit requests
    /// and self-correction downgrades.
    #[must_use]
    pub fn current(explanation: impl Into<String>) -> Self {
        Self {
            kind: IntentKind::Current,
            comparison: ComparisonKind::Level,
            confidence: 1.0,
            explanation: explanation.into(),
        }
    }

    /// True when this intent needs data from two periods.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(self.kind, IntentKind::Compare { .. })
    }

    /// The reference period's display label, when there is one.
    #[must_use]
    pub fn reference_label(&self) -> Option<&str> {
        match &self.kind {
            IntentKind::Compare { reference, .. } => Some(reference.label.as_str()),
            _ => None,
        }
    }
}

/// Classify `query` against `today`.
///
/// Rules run in fixed, documented priority: compare rules, then filter
/// rules, then the Current fallback. The first rule to claim the query
/// wins.
#[must_use]
pub fn resolve_intent(query: &str, today: NaiveDate) -> TemporalIntent {
    let query_lower = query.to_lowercase();
    let query_lower = query_lower.trim();

    for rule in rules::COMPARE_RULES {
        if let Some(intent) = (rule.apply)(query_lower, today) {
            tracing::debug!(rule = rule.name, "compare rule matched");
            return intent;
        }
    }
    for rule in rules::FILTER_RULES {
        if let Some(intent) = (rule.apply)(query_lower, today) {
            tracing::debug!(rule = rule.name, "filter rule matched");
            return intent;
        }
    }

    TemporalIntent {
        kind: IntentKind::Current,
        comparison: ComparisonKind::Level,
        confidence: 0.5,
        explanation: "Showing current/recent data.".to_string(),
    }
}

static CHANGE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:change|changed|difference|delta|moved?|shifted?)\b").unwrap()
});
static PERCENT_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:percent|%|growth|rate\s+of\s+change)\b").unwrap());

/// Secondary, non-routing classification of what kind of comparison the
/// caller wants.
pub(crate) fn comparison_kind(query_lower: &str) -> ComparisonKind {
    if CHANGE_WORDS.is_match(query_lower) {
        ComparisonKind::Change
    } else if PERCENT_WORDS.is_match(query_lower) {
        ComparisonKind::Percent
    } else {
        ComparisonKind::Level
    }
}
