use chrono::NaiveDate;
use quadro_core::{
    DateSpan, Observation, ObservationSeries, Source, SummaryMethod, slice_span, summarize,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn monthly_series() -> ObservationSeries {
    ObservationSeries::new(
        "UNRATE",
        "Unemployment Rate",
        Source::Fred,
        (1..=12)
            .map(|m| Observation::new(d(2023, m, 1), f64::from(m)))
            .collect(),
    )
}

#[test]
fn slicing_is_inclusive_on_both_bounds() {
    let series = monthly_series();
    let span = DateSpan::new(Some(d(2023, 3, 1)), Some(d(2023, 6, 1)), "Q2-ish");
    let points = slice_span(&series, &span);
    assert_eq!(points.len(), 4);
    assert_eq!(points.first().unwrap().date, d(2023, 3, 1));
    assert_eq!(points.last().unwrap().date, d(2023, 6, 1));
}

#[test]
fn open_bounds_take_everything_on_that_side() {
    let series = monthly_series();
    let from_july = DateSpan::new(Some(d(2023, 7, 1)), None, "since July");
    assert_eq!(slice_span(&series, &from_july).len(), 6);
    let through_feb = DateSpan::new(None, Some(d(2023, 2, 1)), "through Feb");
    assert_eq!(slice_span(&series, &through_feb).len(), 2);
}

#[test]
fn empty_slice_for_out_of_range_span() {
    let series = monthly_series();
    let span = DateSpan::new(Some(d(1990, 1, 1)), Some(d(1990, 12, 31)), "1990");
    assert!(slice_span(&series, &span).is_empty());
}

#[test]
fn summary_methods() {
    let points = vec![
        Observation::new(d(2023, 1, 1), 4.0),
        Observation::new(d(2023, 2, 1), 2.0),
        Observation::new(d(2023, 3, 1), 6.0),
    ];
    assert_eq!(
        summarize(&points, SummaryMethod::Latest),
        Some((d(2023, 3, 1), 6.0))
    );
    assert_eq!(
        summarize(&points, SummaryMethod::First),
        Some((d(2023, 1, 1), 4.0))
    );
    assert_eq!(
        summarize(&points, SummaryMethod::Average),
        Some((d(2023, 3, 1), 4.0))
    );
    assert_eq!(
        summarize(&points, SummaryMethod::Min),
        Some((d(2023, 2, 1), 2.0))
    );
    assert_eq!(
        summarize(&points, SummaryMethod::Max),
        Some((d(2023, 3, 1), 6.0))
    );
}

#[test]
fn empty_period_summarizes_to_none() {
    assert_eq!(summarize(&[], SummaryMethod::Latest), None);
    assert_eq!(summarize(&[], SummaryMethod::Average), None);
}
