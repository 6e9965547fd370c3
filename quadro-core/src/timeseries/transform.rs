use chrono::{Months, NaiveDate};

use crate::types::{Observation, ObservationSeries};

// A YoY base observation must land within this many days of the target date
// one year back, so irregular cadences still match their nearest period.
const YOY_MATCH_TOLERANCE_DAYS: i64 = 45;

/// Derive a year-over-year percent-change series.
///
/// Each observation is matched against the observation closest to one year
/// earlier (within a tolerance that accommodates monthly and quarterly
/// cadences). Points with no base period, or a zero base value, are dropped
/// rather than fabricated. Returns a new series; the input is untouched.
#[must_use]
pub fn year_over_year_percent(series: &ObservationSeries) -> ObservationSeries {
    let points = series
        .observations
        .iter()
        .filter_map(|obs| {
            let target = obs.date.checked_sub_months(Months::new(12))?;
            let base = closest_observation(&series.observations, target)?;
            if base.value == 0.0 {
                return None;
            }
            let pct = (obs.value - base.value) / base.value.abs() * 100.0;
            Some(Observation::new(obs.date, pct))
        })
        .collect();

    ObservationSeries::new(series.id.clone(), series.name.clone(), series.source, points)
        .with_units("Percent change from year ago")
        .with_frequency(series.frequency.clone())
}

/// Derive a period-over-period change series (each value minus its
/// predecessor). The first observation has no predecessor and is dropped.
#[must_use]
pub fn period_change(series: &ObservationSeries) -> ObservationSeries {
    let points = series
        .observations
        .windows(2)
        .map(|pair| Observation::new(pair[1].date, pair[1].value - pair[0].value))
        .collect();

    let units = if series.units.is_empty() {
        "Change".to_string()
    } else {
        format!("Change, {}", series.units)
    };
    ObservationSeries::new(series.id.clone(), series.name.clone(), series.source, points)
        .with_units(units)
        .with_frequency(series.frequency.clone())
}

fn closest_observation(observations: &[Observation], target: NaiveDate) -> Option<Observation> {
    let idx = observations.partition_point(|o| o.date < target);
    let candidates = [idx.checked_sub(1), Some(idx)];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|i| observations.get(i))
        .min_by_key(|o| (o.date - target).num_days().abs())
        .filter(|o| (o.date - target).num_days().abs() <= YOY_MATCH_TOLERANCE_DAYS)
        .copied()
}
