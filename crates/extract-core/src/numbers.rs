// File: crates/extract-core/src/numbers.rs
// Summary: Number extraction cascade (currency/suffixed, percentages, bare numbers).
// Notes:
// - Families are tried in order and only the first one with any match is used;
//   results are never merged across families.
// - Percentages are kept as raw magnitudes ("12%" -> 12.0).

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// One pattern family of the extraction cascade.
pub struct Matcher {
    pub name: &'static str,
    regex: Regex,
}

impl Matcher {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self { name, regex: Regex::new(pattern).expect("number pattern must compile") }
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Number families in priority order.
pub static CASCADE: Lazy<Vec<Matcher>> = Lazy::new(|| {
    vec![
        Matcher::new("currency", r"[$€£¥]?[0-9,]+(?:\.[0-9]+)?[kKmMbB]?"),
        Matcher::new("percent", r"[0-9,]+(?:\.[0-9]+)?%"),
        Matcher::new("plain", r"[0-9,]+(?:\.[0-9]+)?"),
    ]
});

/// Walk `matchers` in order and return the first family that matched anything.
pub fn first_match<'m, 't>(matchers: &'m [Matcher], text: &'t str) -> Option<(&'m Matcher, Vec<&'t str>)> {
    matchers.iter().find_map(|m| {
        let found = m.find_all(text);
        if found.is_empty() { None } else { Some((m, found)) }
    })
}

/// Parse one matched token into a value.
///
/// Strips currency symbols, thousands separators and percent signs, then
/// applies a trailing `k`/`m`/`b` multiplier (case-insensitive). Returns
/// `None` when nothing numeric is left (e.g. a lone `","`).
pub fn parse_token(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',' | '%'))
        .collect();

    let (digits, multiplier) = match cleaned.chars().last().map(|c| c.to_ascii_lowercase()) {
        Some('k') => (&cleaned[..cleaned.len() - 1], 1e3),
        Some('m') => (&cleaned[..cleaned.len() - 1], 1e6),
        Some('b') => (&cleaned[..cleaned.len() - 1], 1e9),
        _ => (cleaned.as_str(), 1.0),
    };

    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    digits.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Extract every numeric value from `text` using the first matching family.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let Some((family, tokens)) = first_match(&CASCADE, text) else {
        return Vec::new();
    };
    debug!(family = family.name, ?tokens, "number matches");

    tokens
        .into_iter()
        .filter_map(|t| {
            let v = parse_token(t);
            if let Some(v) = v {
                debug!(token = t, value = v, "converted");
            }
            v
        })
        .collect()
}
