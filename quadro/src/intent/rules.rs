//! The ordered classification rules.
//!
//! Rules are (name, matcher) pairs evaluated in fixed priority: every
//! compare rule strictly before every filter rule, so "vs 2019" is never
//! misread as a filter year. Each matcher is a plain function over the
//! lowercased query, independently unit-testable.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use quadro_core::DateSpan;

use super::periods::{decade_span, named_period_span, reference_span, year_span};
use super::{IntentKind, TemporalIntent, comparison_kind};

/// One classification rule: a stable name for logs plus a matcher that
/// either claims the query or passes.
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) apply: fn(&str, NaiveDate) -> Option<TemporalIntent>,
}

/// Comparison triggers, checked first.
pub(crate) static COMPARE_RULES: &[Rule] = &[
    Rule {
        name: "since-period",
        apply: since_period,
    },
    Rule {
        name: "compared-to",
        apply: compared_to,
    },
    Rule {
        name: "like-era",
        apply: like_era,
    },
    Rule {
        name: "now-vs",
        apply: now_vs,
    },
    Rule {
        name: "changed-since",
        apply: changed_since,
    },
    Rule {
        name: "compare-question",
        apply: compare_question,
    },
    Rule {
        name: "higher-lower-than",
        apply: higher_lower_than,
    },
    Rule {
        name: "recovery-from",
        apply: recovery_from,
    },
    Rule {
        name: "period-vs-period",
        apply: period_vs_period,
    },
    Rule {
        name: "before-and-after",
        apply: before_and_after,
    },
    Rule {
        name: "compare-x-to",
        apply: compare_x_to,
    },
];

/// Filter triggers, checked only when no compare rule fired.
pub(crate) static FILTER_RULES: &[Rule] = &[
    Rule {
        name: "year-range",
        apply: year_range,
    },
    Rule {
        name: "in-year",
        apply: in_year,
    },
    Rule {
        name: "during-period",
        apply: during_period,
    },
    Rule {
        name: "in-decade",
        apply: in_decade,
    },
    Rule {
        name: "named-period-mention",
        apply: named_period_mention,
    },
];

// Period vocabulary shared by several compare patterns.
const PERIOD_WORDS: &str = "pre-?(?:pandemic|covid)|post-?(?:pandemic|covid)|covid|pandemic\
|great\\s+recession|stagflation|19[789]0s|20[012]0s|\\d{4}";

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static rule pattern")
}

/// Shared compare-intent builder: every compare rule resolves the reference
/// period the same way and constructs the primary period to start exactly
/// where the reference ends (open-ended references get a fixed two-year
/// recent window instead). The asymmetry prevents window overlap.
fn comparison_from_reference(query_lower: &str, today: NaiveDate) -> Option<TemporalIntent> {
    let reference = reference_span(query_lower, today)?;
    let primary = match reference.end {
        Some(end) => DateSpan::new(Some(end), None, "Current"),
        None => DateSpan::new(
            NaiveDate::from_ymd_opt(today.year() - 2, 1, 1),
            None,
            "Current",
        ),
    };
    let explanation = format!("Comparing current data to {}.", reference.label);
    Some(TemporalIntent {
        kind: IntentKind::Compare { primary, reference },
        comparison: comparison_kind(query_lower),
        confidence: 1.0,
        explanation,
    })
}

fn since_period(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(&format!(r"\b(?:since|from)\s+(?:the\s+)?(?:{PERIOD_WORDS})"))
    });
    static FROM_TO_RANGE: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\bfrom\s+\d{4}\s+to\s+\d{4}\b"));

    // "from 2018 to 2020" is a filter range, not a comparison baseline;
    // leave it for the filter rules.
    if FROM_TO_RANGE.is_match(query) {
        return None;
    }
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn compared_to(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(&format!(
            r"\b(?:compared?\s+to|versus|vs\.?)\s+(?:the\s+)?(?:{PERIOD_WORDS}|last\s+year|a\s+year\s+ago)"
        ))
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn like_era(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(&format!(
            r"\b(?:like|similar\s+to|reminds?\s+(?:me\s+)?of|echoes?|mirrors?|resembles?)\s+(?:the\s+)?(?:{PERIOD_WORDS})"
        ))
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn now_vs(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(r"\b(?:now|today|current(?:ly)?)\s+(?:vs\.?|versus|compared\s+to)\s+")
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn changed_since(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(r"\bhow\s+(?:has|have|did)\s+.+\s+(?:changed?|evolved?|moved?|shifted?)\s+(?:since|from|compared)")
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn compare_question(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(&format!(
            r"\bhow\s+(?:does|do|did)\s+.+\s+compare\s+to\s+(?:the\s+)?(?:{PERIOD_WORDS})"
        ))
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn higher_lower_than(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(r"\b(?:higher|lower|more|less|better|worse|stronger|weaker)\s+than\s+(?:the\s+)?(?:pre-?(?:pandemic|covid)|stagflation|19[789]0s|before|in\s+\d{4})")
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn recovery_from(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\brecovery\s+(?:from|since)\s+"));
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn period_vs_period(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\b\d{4}s?\s+(?:vs\.?|versus|compared\s+to)\s+\d{4}s?"));
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn before_and_after(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bbefore\s+and\s+after\s+"));
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn compare_x_to(query: &str, today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        regex(&format!(
            r"\bcompare\s+.+\s+to\s+(?:the\s+)?(?:{PERIOD_WORDS})"
        ))
    });
    RE.is_match(query)
        .then(|| comparison_from_reference(query, today))
        .flatten()
}

fn filter_intent(span: DateSpan, explanation: String) -> TemporalIntent {
    TemporalIntent {
        kind: IntentKind::Filter { span },
        comparison: super::ComparisonKind::Level,
        confidence: 1.0,
        explanation,
    }
}

fn year_range(query: &str, _today: NaiveDate) -> Option<TemporalIntent> {
    static FROM_TO: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\bfrom\s+(\d{4})\s+to\s+(\d{4})\b"));
    static DASHED: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\b(\d{4})\s*[-–]\s*(\d{4})\b"));

    let captures = FROM_TO.captures(query).or_else(|| DASHED.captures(query))?;
    let mut start: i32 = captures[1].parse().ok()?;
    let mut end: i32 = captures[2].parse().ok()?;
    // Reversed ranges are a typo, not an error; swap them.
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let span = DateSpan::new(
        NaiveDate::from_ymd_opt(start, 1, 1),
        NaiveDate::from_ymd_opt(end, 12, 31),
        format!("{start}-{end}"),
    );
    Some(filter_intent(
        span,
        format!("Showing data from {start} to {end}."),
    ))
}

fn in_year(query: &str, _today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bin\s+(\d{4})\b"));

    let captures = RE.captures(query)?;
    // Comparison markers right after the year mean this is not a filter;
    // compare rules have already passed on the query, but stay defensive.
    let rest = query[captures.get(0)?.end()..].trim_start();
    if rest.starts_with("vs") || rest.starts_with("versus") || rest.starts_with("compared") {
        return None;
    }
    let year: i32 = captures[1].parse().ok()?;
    Some(filter_intent(
        year_span(year),
        format!("Showing data for {year}."),
    ))
}

fn during_period(query: &str, _today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> = LazyLock::new(|| regex(r"\bduring\s+"));

    if !RE.is_match(query) {
        return None;
    }
    let span = named_period_span(query)?;
    let explanation = format!("Showing data for {}.", span.label);
    Some(filter_intent(span, explanation))
}

fn in_decade(query: &str, _today: NaiveDate) -> Option<TemporalIntent> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| regex(r"\bin\s+the\s+(?:19[789]0|20[012]0)s\b"));

    if !RE.is_match(query) {
        return None;
    }
    let span = decade_span(query)?;
    let explanation = format!("Showing data for {}.", span.label);
    Some(filter_intent(span, explanation))
}

fn named_period_mention(query: &str, _today: NaiveDate) -> Option<TemporalIntent> {
    let span = named_period_span(query)?;
    let explanation = format!("Showing data for {}.", span.label);
    Some(filter_intent(span, explanation))
}
