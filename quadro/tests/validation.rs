mod helpers;

use std::collections::HashMap;

use helpers::{d, short_series, today};
use quadro::extract::extract_periods;
use quadro::{
    IntentKind, Observation, ObservationSeries, Severity, Source, resolve_intent, self_correct,
    validate,
};

#[test]
fn unfulfillable_comparison_fails_validation_then_corrects_once() {
    // Every candidate starts after the reference window: zero usable
    // metrics.
    let intent = resolve_intent("how has housing changed since pre-pandemic?", today());
    let full = HashMap::from([("SHORT".to_string(), short_series("SHORT"))]);
    let data = extract_periods(&intent, full);

    let validation = validate(&intent, &data);
    assert!(!validation.is_valid);
    let errors: Vec<_> = validation
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1, "exactly one overall error");
    assert!(!validation.corrections.is_empty());

    // Self-correction downgrades to Current with a note.
    let (corrected, note) =
        self_correct(&validation, &intent, &data).expect("correction fires");
    assert_eq!(corrected.kind, IntentKind::Current);
    assert!(note.contains("Displaying the full data range instead"));

    // Re-validating the corrected result triggers no further correction.
    let data = extract_periods(&corrected, data.full);
    let revalidation = validate(&corrected, &data);
    assert!(revalidation.is_valid);
    assert!(self_correct(&revalidation, &corrected, &data).is_none());
}

#[test]
fn partial_comparison_warns_but_never_auto_corrects() {
    let intent = resolve_intent("jobs since pre-pandemic", today());
    let good = ObservationSeries::new(
        "GOOD",
        "Good Series",
        Source::Fred,
        vec![
            Observation::new(d(2019, 6, 1), 1.0),
            Observation::new(d(2024, 6, 1), 2.0),
        ],
    );
    let full = HashMap::from([
        ("GOOD".to_string(), good),
        ("SHORT".to_string(), short_series("SHORT")),
    ]);
    let data = extract_periods(&intent, full);

    let validation = validate(&intent, &data);
    assert!(validation.is_valid, "one usable metric keeps the comparison");
    assert!(validation.has_warnings());
    assert!(
        self_correct(&validation, &intent, &data).is_none(),
        "partial success is surfaced as-is"
    );
}

#[test]
fn series_starting_too_late_gets_a_pointed_warning() {
    let intent = resolve_intent("spending vs pre-pandemic", today());
    let full = HashMap::from([("SHORT".to_string(), short_series("SHORT"))]);
    let data = extract_periods(&intent, full);

    let validation = validate(&intent, &data);
    let warning = validation
        .issues
        .iter()
        .find(|i| i.severity == Severity::Warning && i.series_id.as_deref() == Some("SHORT"))
        .expect("per-series warning");
    assert!(warning.message.contains("only starts from"));
    assert!(warning.remedy.is_some());
}

#[test]
fn filter_with_empty_window_is_a_warning_not_an_error() {
    let intent = resolve_intent("GDP in 2022", today());
    // Series with no 2022 observations.
    let series = ObservationSeries::new(
        "OLD",
        "Old Series",
        Source::Fred,
        vec![Observation::new(d(1999, 1, 1), 1.0)],
    );
    let full = HashMap::from([("OLD".to_string(), series)]);
    let data = extract_periods(&intent, full);

    let validation = validate(&intent, &data);
    assert!(validation.is_valid);
    assert!(validation.has_warnings());
    assert!(!validation.has_errors());
    assert!(self_correct(&validation, &intent, &data).is_none());
}

#[test]
fn current_intent_warns_per_empty_series() {
    let intent = resolve_intent("whats the latest", today());
    let full = HashMap::from([
        (
            "EMPTY".to_string(),
            ObservationSeries::new("EMPTY", "Empty", Source::Fred, vec![]),
        ),
        (
            "ERR".to_string(),
            ObservationSeries::from_error("ERR", Source::Fred, "transport down"),
        ),
    ]);
    let data = extract_periods(&intent, full);

    let validation = validate(&intent, &data);
    assert!(validation.is_valid);
    assert_eq!(
        validation
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count(),
        2
    );
    // The error-tagged series surfaces its failure as the remedy.
    let err_issue = validation
        .issues
        .iter()
        .find(|i| i.series_id.as_deref() == Some("ERR"))
        .unwrap();
    assert_eq!(err_issue.remedy.as_deref(), Some("transport down"));
}

#[test]
fn user_message_collects_findings_and_actions() {
    let intent = resolve_intent("how has housing changed since pre-pandemic?", today());
    let full = HashMap::from([("SHORT".to_string(), short_series("SHORT"))]);
    let data = extract_periods(&intent, full);
    let validation = validate(&intent, &data);

    let message = validation.user_message();
    assert!(message.contains("Error:"));
    assert!(message.contains("Suggested actions:"));
}

#[test]
fn clean_results_produce_an_empty_user_message() {
    let intent = resolve_intent("unemployment since pre-pandemic", today());
    let series = ObservationSeries::new(
        "UNRATE",
        "Unemployment Rate",
        Source::Fred,
        vec![
            Observation::new(d(2020, 2, 1), 3.5),
            Observation::new(d(2024, 11, 1), 4.1),
        ],
    );
    let full = HashMap::from([("UNRATE".to_string(), series)]);
    let data = extract_periods(&intent, full);
    let validation = validate(&intent, &data);
    assert!(validation.is_valid);
    assert_eq!(validation.user_message(), "");
}
