//! Intent validation and single-shot self-correction.
//!
//! Validation checks that the fetched data can actually satisfy the
//! detected intent and reports everything it finds as data, never as an
//! exception: the consumer decides whether a partial answer is worth
//! showing. The only automatic remediation in the whole engine is
//! [`self_correct`], which downgrades an unfulfillable comparison to
//! "show full history" — once, and never again on the corrected intent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use quadro_core::DateSpan;

use crate::extract::MultiPeriodData;
use crate::intent::{IntentKind, TemporalIntent};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The result cannot satisfy the intent.
    Error,
    /// The result is degraded but still informative.
    Warning,
    /// Advisory only.
    Info,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Finding severity.
    pub severity: Severity,
    /// The series this concerns, or `None` for whole-result findings.
    pub series_id: Option<String>,
    /// What went wrong.
    pub message: String,
    /// What the caller might do about it.
    pub remedy: Option<String>,
}

impl ValidationIssue {
    fn error(series_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            series_id: series_id.map(ToString::to_string),
            message: message.into(),
            remedy: None,
        }
    }

    fn warning(series_id: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            series_id: Some(series_id.to_string()),
            message: message.into(),
            remedy: None,
        }
    }

    fn with_remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remedy = Some(remedy.into());
        self
    }
}

/// Result of validating fetched data against a temporal intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// False when any error-severity issue was found.
    pub is_valid: bool,
    /// Everything found, in discovery order.
    pub issues: Vec<ValidationIssue>,
    /// Suggested corrective actions, in plain language.
    pub corrections: Vec<String>,
}

impl ValidationResult {
    /// True when any issue is error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// True when any issue is warning severity.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// A user-facing summary of the findings; empty when there is nothing
    /// worth saying.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_valid && !self.has_warnings() {
            return String::new();
        }
        let mut lines: Vec<String> = Vec::new();
        for issue in &self.issues {
            match issue.severity {
                Severity::Error => lines.push(format!("Error: {}", issue.message)),
                Severity::Warning => lines.push(format!("Note: {}", issue.message)),
                Severity::Info => {}
            }
        }
        if !self.corrections.is_empty() {
            lines.push("Suggested actions:".to_string());
            for correction in &self.corrections {
                lines.push(format!("  - {correction}"));
            }
        }
        lines.join("\n")
    }
}

/// Check that `data` can satisfy `intent`.
///
/// Compare intents require data from both periods; filter intents require
/// data inside the window; current intents just require data. Partial
/// shortfalls are warnings — a comparison that works for two of three
/// series is still informative. Only a comparison with *zero* usable
/// metrics is an error.
#[must_use]
pub fn validate(intent: &TemporalIntent, data: &MultiPeriodData) -> ValidationResult {
    let mut issues = Vec::new();
    let mut corrections = Vec::new();

    match &intent.kind {
        IntentKind::Compare { reference, .. } => {
            // Defensive: the type system guarantees a reference span exists,
            // but a span with no bounds at all cannot anchor a comparison.
            if reference.start.is_none() && reference.end.is_none() {
                issues.push(
                    ValidationIssue::error(None, "No reference period defined for comparison.")
                        .with_remedy("Check temporal intent detection."),
                );
            } else {
                validate_comparison(reference, data, &mut issues, &mut corrections);
            }
        }
        IntentKind::Filter { span } => {
            for (id, series) in &data.full {
                if series.is_empty() || series.error.is_some() {
                    continue;
                }
                let in_window = series.observations.iter().any(|o| span.contains(o.date));
                if !in_window {
                    issues.push(
                        ValidationIssue::warning(
                            id,
                            format!(
                                "No data for {} in the requested period ({}).",
                                series.name,
                                describe_span(span.start, span.end)
                            ),
                        )
                        .with_remedy("The series may not have data for this time range."),
                    );
                }
            }
        }
        IntentKind::Current => {
            for (id, series) in &data.full {
                if series.is_empty() {
                    let mut issue =
                        ValidationIssue::warning(id, format!("No data available for {id}."));
                    if let Some(error) = &series.error {
                        issue = issue.with_remedy(error.clone());
                    }
                    issues.push(issue);
                }
            }
        }
    }

    let is_valid = !issues.iter().any(|i| i.severity == Severity::Error);
    ValidationResult {
        is_valid,
        issues,
        corrections,
    }
}

fn validate_comparison(
    reference: &DateSpan,
    data: &MultiPeriodData,
    issues: &mut Vec<ValidationIssue>,
    corrections: &mut Vec<String>,
) {
    let reference_label = if data.reference_label.is_empty() {
        "the reference period".to_string()
    } else {
        data.reference_label.clone()
    };

    for (id, series) in &data.full {
        if series.is_empty() || series.error.is_some() {
            let mut issue = ValidationIssue::warning(id, format!("No data available for {id}."));
            if let Some(error) = &series.error {
                issue = issue.with_remedy(error.clone());
            }
            issues.push(issue);
            continue;
        }

        let reference_points = data.reference.get(id).map_or(0, Vec::len);
        if reference_points == 0 {
            // Distinguish "starts too late" from "has a gap"; the remedy
            // differs.
            let earliest = series.earliest().map(|o| o.date);
            let anchor = reference.end.or(reference.start);
            let starts_too_late =
                matches!((earliest, anchor), (Some(e), Some(a)) if e > a);
            if starts_too_late {
                issues.push(
                    ValidationIssue::warning(
                        id,
                        format!(
                            "{} data only starts from {}, after the {}.",
                            series.name,
                            format_month(earliest.unwrap_or_default()),
                            reference_label
                        ),
                    )
                    .with_remedy("Consider a series that extends further back."),
                );
            } else {
                issues.push(
                    ValidationIssue::warning(
                        id,
                        format!("No data found for {} in {}.", series.name, reference_label),
                    )
                    .with_remedy("The series may have gaps in this period."),
                );
            }
        }

        let primary_points = data.primary.get(id).map_or(0, Vec::len);
        if primary_points == 0 {
            issues.push(
                ValidationIssue::warning(
                    id,
                    format!("No recent data available for {}.", series.name),
                )
                .with_remedy("The series may be discontinued or delayed."),
            );
        }
    }

    if !data.has_comparison_data() {
        issues.push(
            ValidationIssue::error(
                None,
                format!("Unable to compare any series to {reference_label}."),
            )
            .with_remedy("Try a different time period or different indicators."),
        );
        corrections
            .push("Remove the temporal comparison and show the full data range instead.".into());
    }
}

/// Attempt the one automatic remediation the engine performs.
///
/// Fires only when validation failed *and* the intent was a comparison with
/// zero usable metrics. Returns the replacement intent and a user-facing
/// note; the caller applies it at most once and never re-corrects the
/// corrected intent (which, being Current, could not fire again anyway).
#[must_use]
pub fn self_correct(
    validation: &ValidationResult,
    intent: &TemporalIntent,
    data: &MultiPeriodData,
) -> Option<(TemporalIntent, String)> {
    if validation.is_valid {
        return None;
    }
    if !intent.is_comparison() || data.has_comparison_data() {
        return None;
    }

    let label = intent
        .reference_label()
        .unwrap_or("the reference period")
        .to_string();
    let corrected = TemporalIntent::current(format!(
        "Unable to compare to {label}. Showing all available data instead."
    ));
    let note = format!(
        "Note: Unable to generate a meaningful comparison with {label}. \
         Displaying the full data range instead."
    );
    Some((corrected, note))
}

fn describe_span(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{} to {}", format_month(start), format_month(end))
        }
        (Some(start), None) => format!("after {}", format_month(start)),
        (None, Some(end)) => format!("before {}", format_month(end)),
        (None, None) => "all time".to_string(),
    }
}

fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
