// File: crates/extract-core/src/labels.rs
// Summary: Label extraction aligned to a known value count.
// Notes:
// - Result length always equals `expected`; shortfalls are padded with
//   synthetic "Category N" labels and overshoot is truncated.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,:;]").expect("split pattern"));

// Letter run (may contain inner whitespace) starting at an ASCII letter.
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z\s]*").expect("word pattern"));

// ASCII word boundaries and case folding: accented letters are not word characters.
static MONTHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)\b(?:jan|january|feb|february|mar|march|apr|april|may|jun|june|jul|july|aug|august|sep|september|oct|october|nov|november|dec|december)\b",
    )
    .expect("month pattern")
});

static DAYS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b(?:mon|monday|tue|tuesday|wed|wednesday|thu|thursday|fri|friday|sat|saturday|sun|sunday)\b")
        .expect("day pattern")
});

fn starts_value(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '$' | '€' | '£' | '¥')
}

/// First word run in `segment` that sits directly before a digit or currency symbol.
fn label_before_value(segment: &str) -> Option<&str> {
    WORD_RUN.find_iter(segment).find_map(|m| {
        let next = segment[m.end()..].chars().next()?;
        if starts_value(next) { Some(m.as_str().trim()) } else { None }
    })
}

/// Candidate labels from the "word before a number" heuristic, in segment order.
pub fn labels_before_values(text: &str) -> Vec<String> {
    SEGMENT_SPLIT
        .split(text)
        .filter_map(label_before_value)
        .map(str::to_owned)
        .collect()
}

/// Month tokens as written, in order of appearance.
pub fn month_tokens(text: &str) -> Vec<String> {
    MONTHS.find_iter(text).map(|m| m.as_str().to_owned()).collect()
}

/// Day-name tokens as written, in order of appearance.
pub fn day_tokens(text: &str) -> Vec<String> {
    DAYS.find_iter(text).map(|m| m.as_str().to_owned()).collect()
}

/// Derive exactly `expected` labels for the values found in `text`.
pub fn extract_labels(text: &str, expected: usize) -> Vec<String> {
    let mut labels = labels_before_values(text);

    if labels.len() < expected {
        let months = month_tokens(text);
        if months.len() >= expected {
            labels = months;
        } else {
            let days = day_tokens(text);
            if days.len() >= expected {
                labels = days;
            }
        }
    }

    while labels.len() < expected {
        labels.push(format!("Category {}", labels.len() + 1));
    }
    labels.truncate(expected);
    debug!(?labels, expected, "extracted labels");
    labels
}
