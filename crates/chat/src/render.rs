// File: crates/chat/src/render.rs
// Summary: Renderer seam, single-slot chart lifecycle, and the Skia PNG renderer.
// Notes:
// - At most one chart is live. Replacing it destroys the old handle before
//   the new one is drawn; a failed draw leaves the slot empty.

use std::path::{Path, PathBuf};

use chart_core::{Chart, RenderError, RenderOptions, SeriesType};
use extract_core::{ChartKind, ChartSpec};
use tracing::{debug, info, warn};

/// A live chart that can be resized and torn down.
pub trait ChartHandle {
    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError>;
    fn destroy(self);
}

/// Draws a chart description onto the display surface.
pub trait Renderer {
    type Handle: ChartHandle;
    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Handle, RenderError>;
}

#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self { Self { current: None } }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self { Self::default() }

    /// Destroy the live chart (if any), then draw `spec` into the slot.
    pub fn replace<R>(&mut self, renderer: &mut R, spec: &ChartSpec) -> Result<&H, RenderError>
    where
        R: Renderer<Handle = H>,
    {
        self.clear();
        let handle = renderer.draw(spec)?;
        Ok(self.current.insert(handle))
    }

    /// Destroy the live chart and leave the slot empty.
    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.destroy();
        }
    }

    pub fn get(&self) -> Option<&H> { self.current.as_ref() }
    pub fn is_live(&self) -> bool { self.current.is_some() }

    /// Forward a surface resize to the live chart; no-op when empty.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        match self.current.as_mut() {
            Some(h) => h.resize(width, height),
            None => Ok(()),
        }
    }
}

pub fn series_type_for(kind: ChartKind) -> SeriesType {
    match kind {
        ChartKind::Line => SeriesType::Line,
        ChartKind::Doughnut => SeriesType::Doughnut,
        ChartKind::Bar => SeriesType::Bar,
    }
}

/// Renders charts with `chart-core` and keeps the latest PNG on disk.
#[derive(Clone, Debug)]
pub struct SkiaRenderer {
    opts: RenderOptions,
    output: PathBuf,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions, output: impl Into<PathBuf>) -> Self {
        Self { opts, output: output.into() }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn output(&self) -> &Path { &self.output }
}

impl Renderer for SkiaRenderer {
    type Handle = PngChart;

    fn draw(&mut self, spec: &ChartSpec) -> Result<PngChart, RenderError> {
        let chart = Chart::categorical(
            series_type_for(spec.kind()),
            spec.labels().to_vec(),
            spec.values().to_vec(),
        );
        let mut handle = PngChart { chart, opts: self.opts.clone(), png: Vec::new(), output: self.output.clone() };
        handle.redraw()?;
        info!(kind = %spec.kind(), points = spec.len(), output = %self.output.display(), "chart rendered");
        Ok(handle)
    }
}

/// A rendered chart: the model, its options and the encoded PNG on disk.
#[derive(Debug)]
pub struct PngChart {
    chart: Chart,
    opts: RenderOptions,
    png: Vec<u8>,
    output: PathBuf,
}

impl PngChart {
    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn png(&self) -> &[u8] { &self.png }
    pub fn output(&self) -> &Path { &self.output }
    pub fn size(&self) -> (i32, i32) { (self.opts.width, self.opts.height) }

    fn redraw(&mut self) -> Result<(), RenderError> {
        let bytes = self.chart.render_to_png_bytes(&self.opts)?;
        if let Some(parent) = self.output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.output, &bytes)?;
        self.png = bytes;
        Ok(())
    }
}

impl ChartHandle for PngChart {
    fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.opts.width = width;
        self.opts.height = height;
        self.redraw()?;
        debug!(width, height, "chart resized");
        Ok(())
    }

    fn destroy(self) {
        match std::fs::remove_file(&self.output) {
            Ok(()) => debug!(output = %self.output.display(), "chart destroyed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(error = %e, output = %self.output.display(), "failed to remove chart output"),
        }
    }
}
