// File: crates/chart-core/src/error.rs
// Summary: Rendering errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No raster surface could be allocated for the requested size.
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back pixels")]
    ReadPixels,
    #[error("series '{series}' has {values} values for {categories} categories")]
    Misaligned { series: String, values: usize, categories: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
