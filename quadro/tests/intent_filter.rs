mod helpers;

use helpers::{d, today};
use quadro::{IntentKind, resolve_intent};

fn filter_span(query: &str) -> quadro::DateSpan {
    match resolve_intent(query, today()).kind {
        IntentKind::Filter { span } => span,
        other => panic!("expected filter intent for {query:?}, got {other:?}"),
    }
}

#[test]
fn in_year_filters_to_that_calendar_year() {
    let span = filter_span("GDP in 2022");
    assert_eq!(span.start, Some(d(2022, 1, 1)));
    assert_eq!(span.end, Some(d(2022, 12, 31)));
}

#[test]
fn from_to_range_is_a_filter_not_a_comparison() {
    let span = filter_span("unemployment from 2018 to 2020");
    assert_eq!(span.start, Some(d(2018, 1, 1)));
    assert_eq!(span.end, Some(d(2020, 12, 31)));
}

#[test]
fn reversed_ranges_are_swapped() {
    let span = filter_span("inflation from 2020 to 2018");
    assert_eq!(span.start, Some(d(2018, 1, 1)));
    assert_eq!(span.end, Some(d(2020, 12, 31)));
}

#[test]
fn dashed_year_range_is_a_filter() {
    let span = filter_span("treasury yields 2015-2019");
    assert_eq!(span.start, Some(d(2015, 1, 1)));
    assert_eq!(span.end, Some(d(2019, 12, 31)));
}

#[test]
fn during_named_period_filters_to_its_bounds() {
    let span = filter_span("unemployment during the great recession");
    assert_eq!(span.start, Some(d(2007, 12, 1)));
    assert_eq!(span.end, Some(d(2009, 6, 30)));
    assert_eq!(span.label, "Great Recession (Dec 2007 - Jun 2009)");
}

#[test]
fn in_decade_filters_to_the_decade() {
    let span = filter_span("what was inflation like in the 1990s");
    assert_eq!(span.start, Some(d(1990, 1, 1)));
    assert_eq!(span.end, Some(d(1999, 12, 31)));
}

#[test]
fn bare_named_period_mention_is_a_filter() {
    // No comparison marker anywhere, so the era mention means "show me that
    // era".
    let span = filter_span("covid unemployment");
    assert_eq!(span.start, Some(d(2020, 3, 1)));
    assert_eq!(span.end, Some(d(2021, 12, 31)));
}

#[test]
fn filter_bounds_are_idempotent() {
    let first = resolve_intent("GDP in 2022", today());
    let second = resolve_intent("GDP in 2022", today());
    assert_eq!(first, second);
}
