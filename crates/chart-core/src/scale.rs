// File: crates/chart-core/src/scale.rs
// Summary: Value (Y) and category band (X) scale transforms.

/// Value Y coordinate (e.g., sales figure).
pub type Value = f64;

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}

/// Horizontal category scale. With `offset`, categories sit in the middle of
/// equal bands (bars); without it, the first and last sit on the plot edges (lines).
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
    pub offset: bool,
}

impl BandScale {
    pub fn new(left_px: f32, right_px: f32, count: usize, offset: bool) -> Self {
        Self { left_px, right_px, count, offset }
    }

    /// Width of one category band.
    pub fn bandwidth(&self) -> f32 {
        (self.right_px - self.left_px) / self.count.max(1) as f32
    }

    /// Pixel x of category `i`.
    pub fn center(&self, i: usize) -> f32 {
        let width = self.right_px - self.left_px;
        if self.offset {
            self.left_px + (i as f32 + 0.5) * self.bandwidth()
        } else if self.count < 2 {
            self.left_px + width * 0.5
        } else {
            self.left_px + i as f32 * width / (self.count - 1) as f32
        }
    }
}
