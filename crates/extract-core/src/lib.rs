// File: crates/extract-core/src/lib.rs
// Summary: Extraction library entry point; turns free text into an aligned chart description.

pub mod classify;
pub mod error;
pub mod labels;
pub mod numbers;
pub mod spec;

pub use classify::{determine_chart_type, ChartKind};
pub use error::ExtractError;
pub use labels::extract_labels;
pub use numbers::extract_numbers;
pub use spec::ChartSpec;
