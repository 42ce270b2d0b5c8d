// File: crates/extract-core/src/error.rs
// Summary: Errors raised while turning text into a chart description.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// None of the number patterns produced a parseable value.
    #[error("no numerical data found in input")]
    NoNumericData,
    /// Labels and values must be index-aligned.
    #[error("label/value count mismatch: {labels} labels for {values} values")]
    Misaligned { labels: usize, values: usize },
}
