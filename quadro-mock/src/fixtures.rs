//! Deterministic fixture series.

use chrono::NaiveDate;

use quadro_core::{Observation, ObservationSeries};
use quadro_types::Source;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("fixture date")
}

/// Monthly unemployment-rate-shaped series, Jan 2018 through Nov 2024.
///
/// Tracks the familiar contour: low-3s before 2020, a spike to 14.8 in
/// April 2020, a long glide back down, then a slow drift up to 4.1 by
/// late 2024.
#[must_use]
pub fn unemployment_rate() -> ObservationSeries {
    let mut points = Vec::new();
    for m in 1..=12u32 {
        points.push(Observation::new(d(2018, m, 1), 3.9));
    }
    for m in 1..=12u32 {
        points.push(Observation::new(d(2019, m, 1), 3.6));
    }
    // 2020: pre-pandemic reading in February, spike in April.
    let path_2020 = [3.6, 3.5, 4.4, 14.8, 13.2, 11.0, 10.2, 8.4, 7.8, 6.8, 6.7, 6.7];
    for (i, v) in path_2020.iter().enumerate() {
        points.push(Observation::new(d(2020, i as u32 + 1, 1), *v));
    }
    let path_2021 = [6.4, 6.2, 6.1, 6.1, 5.8, 5.9, 5.4, 5.1, 4.7, 4.5, 4.2, 3.9];
    for (i, v) in path_2021.iter().enumerate() {
        points.push(Observation::new(d(2021, i as u32 + 1, 1), *v));
    }
    for m in 1..=12u32 {
        points.push(Observation::new(d(2022, m, 1), 3.6));
    }
    for m in 1..=12u32 {
        points.push(Observation::new(d(2023, m, 1), 3.7));
    }
    let path_2024 = [3.7, 3.9, 3.8, 3.9, 4.0, 4.1, 4.3, 4.2, 4.1, 4.1, 4.1];
    for (i, v) in path_2024.iter().enumerate() {
        points.push(Observation::new(d(2024, i as u32 + 1, 1), *v));
    }
    ObservationSeries::new("UNRATE", "Unemployment Rate", Source::Mock, points)
        .with_units("Percent")
        .with_frequency("Monthly")
}

/// Quarterly real GDP growth (SAAR), 2015 Q1 through 2024 Q3.
#[must_use]
pub fn real_gdp_growth() -> ObservationSeries {
    let quarters: &[(i32, u32, f64)] = &[
        (2015, 3, 3.3),
        (2015, 6, 2.3),
        (2015, 9, 1.3),
        (2015, 12, 0.6),
        (2016, 3, 2.4),
        (2016, 6, 1.2),
        (2016, 9, 2.4),
        (2016, 12, 2.0),
        (2017, 3, 1.7),
        (2017, 6, 2.1),
        (2017, 9, 3.4),
        (2017, 12, 4.1),
        (2018, 3, 2.8),
        (2018, 6, 2.8),
        (2018, 9, 2.9),
        (2018, 12, 0.7),
        (2019, 3, 2.2),
        (2019, 6, 2.7),
        (2019, 9, 3.6),
        (2019, 12, 1.8),
        (2020, 3, -5.3),
        (2020, 6, -28.0),
        (2020, 9, 34.8),
        (2020, 12, 4.2),
        (2021, 3, 5.2),
        (2021, 6, 6.2),
        (2021, 9, 3.3),
        (2021, 12, 7.0),
        (2022, 3, -2.0),
        (2022, 6, -0.6),
        (2022, 9, 2.7),
        (2022, 12, 2.6),
        (2023, 3, 2.2),
        (2023, 6, 2.1),
        (2023, 9, 4.9),
        (2023, 12, 3.4),
        (2024, 3, 1.6),
        (2024, 6, 3.0),
        (2024, 9, 2.8),
    ];
    let points = quarters
        .iter()
        .map(|&(y, m, v)| Observation::new(d(y, m, 1), v))
        .collect();
    ObservationSeries::new(
        "A191RL1Q225SBEA",
        "Real GDP Growth (SAAR)",
        Source::Mock,
        points,
    )
    .with_units("Percent Change from Preceding Period")
    .with_frequency("Quarterly")
}
