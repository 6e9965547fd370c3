//! The curated named-period table and reference-period resolution.
//!
//! The table is pure data: canonical phrase, absolute bounds, display label.
//! Entries are matched in listed order, so more specific phrases must come
//! before the generic phrases they contain ("pre-pandemic" before
//! "pandemic", "during covid" before "covid").

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use quadro_core::DateSpan;

/// A curated historical era with fixed bounds.
struct NamedPeriod {
    phrase: &'static str,
    start: Option<(i32, u32, u32)>,
    end: Option<(i32, u32, u32)>,
    label: &'static str,
}

const fn era(
    phrase: &'static str,
    start: Option<(i32, u32, u32)>,
    end: Option<(i32, u32, u32)>,
    label: &'static str,
) -> NamedPeriod {
    NamedPeriod {
        phrase,
        start,
        end,
        label,
    }
}

#[rustfmt::skip]
static NAMED_PERIODS: &[NamedPeriod] = &[
    // Pre-pandemic variations
    era("pre-pandemic", None, Some((2020, 2, 29)), "Pre-pandemic (Feb 2020)"),
    era("pre-covid", None, Some((2020, 2, 29)), "Pre-COVID (Feb 2020)"),
    era("before covid", None, Some((2020, 2, 29)), "Pre-COVID (Feb 2020)"),
    era("before the pandemic", None, Some((2020, 2, 29)), "Pre-pandemic (Feb 2020)"),
    era("before 2020", None, Some((2019, 12, 31)), "Before 2020"),
    // COVID period variations
    era("during covid", Some((2020, 3, 1)), Some((2021, 12, 31)), "During COVID"),
    era("during the pandemic", Some((2020, 3, 1)), Some((2021, 12, 31)), "During pandemic"),
    era("post-pandemic", Some((2022, 1, 1)), None, "Post-pandemic (2022+)"),
    era("post-covid", Some((2022, 1, 1)), None, "Post-COVID (2022+)"),
    era("after covid", Some((2022, 1, 1)), None, "After COVID"),
    era("since covid", Some((2020, 3, 1)), None, "Since COVID began"),
    era("covid", Some((2020, 3, 1)), Some((2021, 12, 31)), "COVID period (Mar 2020 - Dec 2021)"),
    era("pandemic", Some((2020, 3, 1)), Some((2021, 12, 31)), "Pandemic period"),
    // Great Recession (2007-2009)
    era("great recession", Some((2007, 12, 1)), Some((2009, 6, 30)), "Great Recession (Dec 2007 - Jun 2009)"),
    era("2008 crisis", Some((2007, 12, 1)), Some((2009, 6, 30)), "2008 Financial Crisis"),
    era("2008 recession", Some((2007, 12, 1)), Some((2009, 6, 30)), "2008 Recession"),
    era("financial crisis", Some((2007, 12, 1)), Some((2009, 6, 30)), "Financial Crisis"),
    era("housing crisis", Some((2007, 12, 1)), Some((2009, 6, 30)), "Housing Crisis (2007-2009)"),
    era("subprime crisis", Some((2007, 12, 1)), Some((2009, 6, 30)), "Subprime Crisis"),
    // 1970s stagflation era
    era("stagflation era", Some((1970, 1, 1)), Some((1982, 12, 31)), "Stagflation Era (1970-1982)"),
    era("stagflation", Some((1970, 1, 1)), Some((1982, 12, 31)), "Stagflation Era (1970-1982)"),
    era("volcker shock", Some((1980, 1, 1)), Some((1982, 12, 31)), "Volcker Shock (1980-1982)"),
    era("volcker era", Some((1979, 8, 1)), Some((1987, 8, 11)), "Volcker Era (1979-1987)"),
    era("the 1970s", Some((1970, 1, 1)), Some((1979, 12, 31)), "The 1970s"),
    era("1970s", Some((1970, 1, 1)), Some((1979, 12, 31)), "The 1970s"),
    // Other decades
    era("the 1980s", Some((1980, 1, 1)), Some((1989, 12, 31)), "The 1980s"),
    era("1980s", Some((1980, 1, 1)), Some((1989, 12, 31)), "The 1980s"),
    era("the 1990s", Some((1990, 1, 1)), Some((1999, 12, 31)), "The 1990s"),
    era("1990s", Some((1990, 1, 1)), Some((1999, 12, 31)), "The 1990s"),
    era("the 2000s", Some((2000, 1, 1)), Some((2009, 12, 31)), "The 2000s"),
    era("2000s", Some((2000, 1, 1)), Some((2009, 12, 31)), "The 2000s"),
    era("the 2010s", Some((2010, 1, 1)), Some((2019, 12, 31)), "The 2010s"),
    era("2010s", Some((2010, 1, 1)), Some((2019, 12, 31)), "The 2010s"),
    // Dot-com bubble and crash
    era("dot-com bubble", Some((1997, 1, 1)), Some((2000, 3, 31)), "Dot-com Bubble (1997-2000)"),
    era("dot-com crash", Some((2000, 3, 1)), Some((2002, 10, 31)), "Dot-com Crash (2000-2002)"),
    era("tech bubble", Some((1997, 1, 1)), Some((2000, 3, 31)), "Tech Bubble (1997-2000)"),
    era("2001 recession", Some((2001, 3, 1)), Some((2001, 11, 30)), "2001 Recession"),
    // Early 1990s recession
    era("1990 recession", Some((1990, 7, 1)), Some((1991, 3, 31)), "1990-1991 Recession"),
    era("1991 recession", Some((1990, 7, 1)), Some((1991, 3, 31)), "1990-1991 Recession"),
    era("gulf war recession", Some((1990, 7, 1)), Some((1991, 3, 31)), "Gulf War Recession (1990-1991)"),
    // Early 1980s recession (double-dip)
    era("1981 recession", Some((1981, 7, 1)), Some((1982, 11, 30)), "1981-1982 Recession"),
    era("1982 recession", Some((1981, 7, 1)), Some((1982, 11, 30)), "1981-1982 Recession"),
    era("double-dip recession", Some((1980, 1, 1)), Some((1982, 11, 30)), "Double-Dip Recession (1980-1982)"),
    // Oil crises
    era("1973 oil crisis", Some((1973, 10, 1)), Some((1974, 3, 31)), "1973 Oil Crisis"),
    era("1979 oil crisis", Some((1979, 1, 1)), Some((1980, 12, 31)), "1979 Oil Crisis"),
    era("oil crisis", Some((1973, 10, 1)), Some((1974, 3, 31)), "Oil Crisis (1973-1974)"),
    era("energy crisis", Some((1973, 10, 1)), Some((1974, 3, 31)), "Energy Crisis (1973-1974)"),
    // Great Moderation
    era("great moderation", Some((1985, 1, 1)), Some((2007, 12, 1)), "Great Moderation (1985-2007)"),
    // Generic fallback; maps to the Great Recession when nothing more
    // specific matched first.
    era("recession", Some((2007, 12, 1)), Some((2009, 6, 30)), "Great Recession"),
];

fn date(parts: (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(parts.0, parts.1, parts.2).expect("static table date")
}

fn span_of(period: &NamedPeriod) -> DateSpan {
    DateSpan::new(
        period.start.map(date),
        period.end.map(date),
        period.label,
    )
}

/// First named period whose canonical phrase occurs in `query_lower`.
pub(crate) fn named_period_span(query_lower: &str) -> Option<DateSpan> {
    NAMED_PERIODS
        .iter()
        .find(|period| query_lower.contains(period.phrase))
        .map(span_of)
}

static DECADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:the\s+)?(19[0-9]0|20[0-2]0)s").unwrap());

/// Decade mention like "the 1970s" as a full-decade span.
pub(crate) fn decade_span(query_lower: &str) -> Option<DateSpan> {
    let captures = DECADE.captures(query_lower)?;
    let decade_start: i32 = captures[1].parse().ok()?;
    Some(DateSpan::new(
        NaiveDate::from_ymd_opt(decade_start, 1, 1),
        NaiveDate::from_ymd_opt(decade_start + 9, 12, 31),
        format!("The {decade_start}s"),
    ))
}

static YEAR_REFERENCE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:since|from|compared\s+to|vs\.?|versus|like|similar\s+to)\s+(\d{4})\b",
        r"\b(\d{4})\s+levels?\b",
        r"\bin\s+(\d{4})\s+(?:vs|versus|compared)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

fn explicit_year_span(query_lower: &str) -> Option<DateSpan> {
    for pattern in YEAR_REFERENCE.iter() {
        if let Some(captures) = pattern.captures(query_lower) {
            let year: i32 = captures[1].parse().ok()?;
            return Some(year_span(year));
        }
    }
    None
}

static LAST_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(last\s+year|a\s+year\s+ago)\b").unwrap());

/// A whole calendar year as a span.
pub(crate) fn year_span(year: i32) -> DateSpan {
    DateSpan::new(
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
        year.to_string(),
    )
}

/// Resolve the reference period of a comparison query.
///
/// Match order is fixed and deliberate: the curated named-period table wins
/// over the decade pattern (curated bounds are more specific), then explicit
/// years, then relative phrases ("last year").
pub(crate) fn reference_span(query_lower: &str, today: NaiveDate) -> Option<DateSpan> {
    if let Some(span) = named_period_span(query_lower) {
        return Some(span);
    }
    if let Some(span) = decade_span(query_lower) {
        return Some(span);
    }
    if let Some(span) = explicit_year_span(query_lower) {
        return Some(span);
    }
    if LAST_YEAR.is_match(query_lower) {
        let year = today.year() - 1;
        let mut span = year_span(year);
        span.label = format!("Last year ({year})");
        return Some(span);
    }
    None
}
