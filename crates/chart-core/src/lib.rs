// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesStyle, SeriesType};
pub use axis::{format_tick, Axis};
pub use theme::Theme;
pub use text::TextShaper;
pub use error::RenderError;
