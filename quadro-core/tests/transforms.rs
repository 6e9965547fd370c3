use chrono::NaiveDate;
use quadro_core::{Observation, ObservationSeries, Source, period_change, year_over_year_percent};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn index_series() -> ObservationSeries {
    // Two years of monthly index levels, growing 2% per year.
    let mut points = Vec::new();
    for m in 1..=12u32 {
        points.push(Observation::new(d(2022, m, 1), 100.0));
    }
    for m in 1..=12u32 {
        points.push(Observation::new(d(2023, m, 1), 102.0));
    }
    ObservationSeries::new("CPIAUCSL", "Consumer Price Index", Source::Fred, points)
        .with_units("Index 1982-1984=100")
}

#[test]
fn yoy_matches_same_month_previous_year() {
    let yoy = year_over_year_percent(&index_series());
    // First year has no base period and contributes nothing.
    assert_eq!(yoy.len(), 12);
    assert_eq!(yoy.earliest().unwrap().date, d(2023, 1, 1));
    for obs in &yoy.observations {
        assert!((obs.value - 2.0).abs() < 1e-9);
    }
    assert_eq!(yoy.units, "Percent change from year ago");
}

#[test]
fn yoy_skips_zero_base_values() {
    let series = ObservationSeries::new(
        "X",
        "X",
        Source::Fred,
        vec![
            Observation::new(d(2022, 1, 1), 0.0),
            Observation::new(d(2023, 1, 1), 5.0),
        ],
    );
    let yoy = year_over_year_percent(&series);
    assert!(yoy.is_empty(), "zero base must not produce an infinity");
}

#[test]
fn yoy_leaves_input_untouched() {
    let series = index_series();
    let before = series.clone();
    let _ = year_over_year_percent(&series);
    assert_eq!(series, before);
}

#[test]
fn period_change_diffs_adjacent_observations() {
    let series = ObservationSeries::new(
        "PAYEMS",
        "Total Nonfarm Payrolls",
        Source::Fred,
        vec![
            Observation::new(d(2024, 1, 1), 157_000.0),
            Observation::new(d(2024, 2, 1), 157_200.0),
            Observation::new(d(2024, 3, 1), 157_150.0),
        ],
    )
    .with_units("Thousands of Persons");
    let changes = period_change(&series);
    assert_eq!(changes.len(), 2);
    assert_eq!(changes.observations[0].value, 200.0);
    assert_eq!(changes.observations[1].value, -50.0);
    assert_eq!(changes.observations[0].date, d(2024, 2, 1));
}
