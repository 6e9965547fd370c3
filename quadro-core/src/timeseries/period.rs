use chrono::NaiveDate;

/// Normalize a provider period label to a calendar date.
///
/// Providers that report periodic labels use three shapes, each mapped to a
/// fixed convention so every downstream component sees one date vocabulary:
///
/// - quarterly `"YYYY-Qn"` → first day of the quarter's last month
/// - annual `"YYYY"` → December 31st
/// - monthly `"YYYY-MM"` → first of the month
///
/// Full `"YYYY-MM-DD"` dates pass through unchanged. Anything else yields
/// `None` and the caller drops the point, the same way null observations are
/// dropped.
///
/// ```
/// use chrono::NaiveDate;
/// use quadro_core::normalize_period_label;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(normalize_period_label("2024-Q1"), Some(d(2024, 3, 1)));
/// assert_eq!(normalize_period_label("2024"), Some(d(2024, 12, 31)));
/// assert_eq!(normalize_period_label("2024-01"), Some(d(2024, 1, 1)));
/// assert_eq!(normalize_period_label("2024-01-15"), Some(d(2024, 1, 15)));
/// assert_eq!(normalize_period_label("garbage"), None);
/// ```
#[must_use]
pub fn normalize_period_label(label: &str) -> Option<NaiveDate> {
    let label = label.trim();

    if let Some((year, quarter)) = label.split_once("-Q") {
        let year: i32 = year.parse().ok()?;
        let month = match quarter {
            "1" => 3,
            "2" => 6,
            "3" => 9,
            "4" => 12,
            _ => return None,
        };
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if label.len() == 4 && label.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = label.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 12, 31);
    }

    if label.len() == 7 {
        let (year, month) = label.split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()
}
