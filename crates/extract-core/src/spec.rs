// File: crates/extract-core/src/spec.rs
// Summary: ChartSpec (kind + aligned labels/values) and the text -> spec pipeline.

use tracing::debug;

use crate::classify::{determine_chart_type, ChartKind};
use crate::error::ExtractError;
use crate::labels::extract_labels;
use crate::numbers::extract_numbers;

/// Chart description handed to a renderer.
/// Contract: `labels.len() == values.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    kind: ChartKind,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSpec {
    /// Build a spec from already aligned parts.
    pub fn new(kind: ChartKind, labels: Vec<String>, values: Vec<f64>) -> Result<Self, ExtractError> {
        if labels.len() != values.len() {
            return Err(ExtractError::Misaligned { labels: labels.len(), values: values.len() });
        }
        Ok(Self { kind, labels, values })
    }

    /// Run the full extraction pipeline: numbers, then count-aligned labels, then kind.
    pub fn from_text(text: &str) -> Result<Self, ExtractError> {
        let values = extract_numbers(text);
        if values.is_empty() {
            return Err(ExtractError::NoNumericData);
        }
        let labels = extract_labels(text, values.len());
        let kind = determine_chart_type(text);
        debug!(%kind, count = values.len(), "chart spec extracted");
        Self::new(kind, labels, values)
    }

    pub fn kind(&self) -> ChartKind { self.kind }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Label/value pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misaligned_parts_are_rejected() {
        let err = ChartSpec::new(ChartKind::Bar, vec!["a".into()], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, ExtractError::Misaligned { labels: 1, values: 2 });
    }

    #[test]
    fn pipeline_aligns_labels_to_values() {
        let spec = ChartSpec::from_text("Sales: Jan 100, Feb 150, Mar 120").expect("spec");
        assert_eq!(spec.kind(), ChartKind::Line);
        assert_eq!(spec.labels(), ["Jan", "Feb", "Mar"]);
        assert_eq!(spec.values(), [100.0, 150.0, 120.0]);
        assert_eq!(spec.rows().next(), Some(("Jan", 100.0)));
    }

    #[test]
    fn no_numbers_is_an_error() {
        assert_eq!(ChartSpec::from_text("hello there"), Err(ExtractError::NoNumericData));
    }
}
