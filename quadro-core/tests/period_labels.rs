use chrono::NaiveDate;
use quadro_core::normalize_period_label;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn quarterly_labels_map_to_last_month_of_quarter() {
    assert_eq!(normalize_period_label("2024-Q1"), Some(d(2024, 3, 1)));
    assert_eq!(normalize_period_label("2024-Q2"), Some(d(2024, 6, 1)));
    assert_eq!(normalize_period_label("2024-Q3"), Some(d(2024, 9, 1)));
    assert_eq!(normalize_period_label("2024-Q4"), Some(d(2024, 12, 1)));
}

#[test]
fn annual_labels_map_to_year_end() {
    assert_eq!(normalize_period_label("2024"), Some(d(2024, 12, 31)));
    assert_eq!(normalize_period_label("1970"), Some(d(1970, 12, 31)));
}

#[test]
fn monthly_labels_map_to_first_of_month() {
    assert_eq!(normalize_period_label("2024-01"), Some(d(2024, 1, 1)));
    assert_eq!(normalize_period_label("2024-12"), Some(d(2024, 12, 1)));
}

#[test]
fn full_dates_pass_through() {
    assert_eq!(normalize_period_label("2024-01-15"), Some(d(2024, 1, 15)));
}

#[test]
fn junk_labels_are_rejected() {
    assert_eq!(normalize_period_label("2024-Q5"), None);
    assert_eq!(normalize_period_label("24"), None);
    assert_eq!(normalize_period_label("not a period"), None);
    assert_eq!(normalize_period_label(""), None);
}

#[test]
fn normalization_is_deterministic() {
    for label in ["2024-Q1", "2024", "2024-01", "2024-01-15"] {
        assert_eq!(normalize_period_label(label), normalize_period_label(label));
    }
}
