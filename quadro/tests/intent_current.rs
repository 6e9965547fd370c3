mod helpers;

use helpers::today;
use quadro::{IntentKind, TemporalIntent, resolve_intent};

#[test]
fn no_temporal_reference_defaults_to_current() {
    let intent = resolve_intent("what is the unemployment rate", today());
    assert_eq!(intent.kind, IntentKind::Current);
    assert_eq!(intent.explanation, "Showing current/recent data.");
}

#[test]
fn ambiguous_queries_are_not_errors() {
    // No pattern matching is IntentAmbiguous territory: the engine answers
    // with recent data rather than failing, at reduced confidence.
    let intent = resolve_intent("economy??", today());
    assert_eq!(intent.kind, IntentKind::Current);
    assert!(intent.confidence < 1.0);
}

#[test]
fn explicit_current_constructor_is_fully_confident() {
    let intent = TemporalIntent::current("Showing all available data.");
    assert_eq!(intent.kind, IntentKind::Current);
    assert_eq!(intent.confidence, 1.0);
    assert!(!intent.is_comparison());
    assert_eq!(intent.reference_label(), None);
}

#[test]
fn plain_year_mention_without_in_is_current() {
    // "2022 revisions" has a year but neither a filter nor a compare shape.
    let intent = resolve_intent("2022 revisions", today());
    assert_eq!(intent.kind, IntentKind::Current);
}
