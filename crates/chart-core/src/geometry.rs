// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (rects, clamping, spline control points).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    /// True when there is no drawable area left.
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) as f32 * 0.5, (self.top + self.bottom) as f32 * 0.5)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

pub type Point = (f32, f32);

fn distance(a: Point, b: Point) -> f32 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

/// Bezier control points around `cur` for a smoothed polyline.
///
/// Returns `(before, after)`: the control point entering `cur` and the one
/// leaving it. Endpoints pass themselves as `prev`/`next`. `tension == 0`
/// collapses both controls onto `cur` (straight segments).
pub fn spline_controls(prev: Point, cur: Point, next: Point, tension: f32) -> (Point, Point) {
    let d01 = distance(prev, cur);
    let d12 = distance(cur, next);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.0 - prev.0;
    let dy = next.1 - prev.1;
    ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
}
