// File: crates/extract-core/src/classify.rs
// Summary: Keyword heuristics mapping free text to a chart kind.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const TIME_KEYWORDS: &[&str] = &["over time", "trend", "daily", "monthly", "weekly", "quarterly"];
const SHARE_KEYWORDS: &[&str] = &["percentage", "%", "survey", "rating", "satisfaction", "feedback"];

// Word-start prefix match: "market" and "december" both count as month words.
// ASCII semantics, so "déjan" starts a word at "jan".
static MONTH_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)").expect("month prefix"));
static DAY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)").expect("day prefix")
});

/// Pick the chart kind for `text`. First rule that fires wins; `Bar` otherwise.
pub fn determine_chart_type(text: &str) -> ChartKind {
    let lower = text.to_lowercase();

    if TIME_KEYWORDS.iter().any(|k| lower.contains(k)) || MONTH_PREFIX.is_match(text) || DAY_PREFIX.is_match(text) {
        return ChartKind::Line;
    }
    if SHARE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return ChartKind::Doughnut;
    }
    ChartKind::Bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_keywords_pick_line() {
        assert_eq!(determine_chart_type("Revenue TREND 10 20"), ChartKind::Line);
        assert_eq!(determine_chart_type("My daily steps 5 6"), ChartKind::Line);
        assert_eq!(determine_chart_type("visits over time: 1, 2"), ChartKind::Line);
    }

    #[test]
    fn month_and_day_words_pick_line() {
        assert_eq!(determine_chart_type("Jan: 5, Feb: 6"), ChartKind::Line);
        assert_eq!(determine_chart_type("Wednesday 4, Thursday 9"), ChartKind::Line);
        // abbreviated day names alone are not enough
        assert_eq!(determine_chart_type("Wed 4, Thu 9"), ChartKind::Bar);
    }

    #[test]
    fn month_rule_matches_word_prefixes() {
        assert_eq!(determine_chart_type("market share 40%"), ChartKind::Line);
    }

    #[test]
    fn word_starts_after_accented_letters() {
        assert_eq!(determine_chart_type("déjan 5, 6"), ChartKind::Line);
        assert_eq!(determine_chart_type("àmonday 5"), ChartKind::Line);
    }

    #[test]
    fn line_beats_doughnut() {
        assert_eq!(determine_chart_type("monthly survey: 40%, 60%"), ChartKind::Line);
    }

    #[test]
    fn share_keywords_pick_doughnut() {
        assert_eq!(determine_chart_type("Excellent: 55%, Good: 33%"), ChartKind::Doughnut);
        assert_eq!(determine_chart_type("Customer Satisfaction 4, 5"), ChartKind::Doughnut);
    }

    #[test]
    fn default_is_bar() {
        assert_eq!(determine_chart_type("apples 3, pears 5"), ChartKind::Bar);
        assert_eq!(determine_chart_type(""), ChartKind::Bar);
    }

    #[test]
    fn classification_is_stable() {
        let text = "Website traffic: 10, 20, 30";
        assert_eq!(determine_chart_type(text), determine_chart_type(text));
    }
}
