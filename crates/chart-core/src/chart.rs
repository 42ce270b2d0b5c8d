// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file, PNG bytes, RGBA) using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::axis::{format_tick, Axis};
use crate::error::RenderError;
use crate::geometry::{clamp, spline_controls, Point, RectI32};
use crate::grid::{linspace, nice_step, snap_range, ticks};
use crate::scale::{BandScale, ValueScale};
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_TARGET: usize = 5;
const FONT_SIZE: f32 = 11.0;
const LEGEND_ROW: f32 = 18.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick, category and legend text. Off for pixel-exact snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_categories(categories: Vec<String>) -> Self {
        Self { categories, ..Self::new() }
    }

    /// Single-series chart with axes already fitted to the data.
    pub fn categorical(series_type: SeriesType, categories: Vec<String>, values: Vec<f64>) -> Self {
        let mut chart = Self::with_categories(categories);
        chart.add_series(Series::with_values(series_type, values));
        chart.autoscale_axes();
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// A chart with any doughnut series is drawn without cartesian axes.
    pub fn is_radial(&self) -> bool {
        self.series.iter().any(|s| s.series_type.is_radial())
    }

    /// Every series must carry exactly one value per category.
    pub fn validate(&self) -> Result<(), RenderError> {
        for s in &self.series {
            if s.values.len() != self.categories.len() {
                return Err(RenderError::Misaligned {
                    series: s.name.clone(),
                    values: s.values.len(),
                    categories: self.categories.len(),
                });
            }
        }
        Ok(())
    }

    /// Fit the X axis to the category indices and the Y axis to the cartesian
    /// series values, snapped outward to round tick steps.
    pub fn autoscale_axes(&mut self) {
        let n = self.categories.len();
        self.x_axis.min = 0.0;
        self.x_axis.max = n.saturating_sub(1) as f64;

        let range = self
            .series
            .iter()
            .filter(|s| !s.series_type.is_radial())
            .filter_map(Series::value_range)
            .fold(None, |acc: Option<(f64, f64)>, (lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
            });
        let (mut lo, mut hi) = range.unwrap_or((0.0, 1.0));
        if self.y_axis.begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if (hi - lo).abs() < 1e-12 {
            hi = lo + 1.0;
        }
        let step = nice_step(hi - lo, TICK_TARGET);
        let (snapped_lo, snapped_hi) = snap_range(lo, hi, step);
        // Snapping near f64::MAX can overflow; keep the raw data range then.
        let (lo, hi) = if snapped_lo.is_finite() && snapped_hi.is_finite() {
            (snapped_lo, snapped_hi)
        } else {
            (lo, hi)
        };
        self.y_axis.min = lo;
        self.y_axis.max = hi;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.rasterize(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = self.rasterize(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn rasterize(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        self.validate()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.paint(surface.canvas(), opts);
        debug!(
            width = opts.width,
            height = opts.height,
            theme = opts.theme.name,
            series = self.series.len(),
            "chart rasterized"
        );
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let mut plot = plot_rect(opts);

        if self.is_radial() {
            if let Some(sh) = &shaper {
                let legend_h = draw_legend(canvas, sh, &self.categories, plot, theme);
                plot.top += legend_h;
            }
            for s in self.series.iter().filter(|s| s.series_type.is_radial()) {
                draw_doughnut(canvas, plot, s, theme);
            }
            return;
        }

        if plot.is_empty() {
            return;
        }

        let bars: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::Bar).collect();
        let band = BandScale::new(plot.left as f32, plot.right as f32, self.categories.len(), !bars.is_empty());
        let y = ValueScale::new_linear(plot.top as f32, plot.bottom as f32, self.y_axis.min, self.y_axis.max);

        draw_grid(canvas, plot, &band, &y, theme);
        draw_axes(canvas, plot, theme);
        if let Some(sh) = &shaper {
            draw_text_labels(canvas, sh, plot, &band, &y, self, theme);
        }

        // Bars first so lines stay visible on top.
        for (slot, s) in bars.iter().enumerate() {
            draw_bar_series(canvas, &band, &y, s, slot, bars.len(), theme);
        }
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::Line) {
            draw_line_series(canvas, plot, &band, &y, s, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn plot_rect(opts: &RenderOptions) -> RectI32 {
    RectI32::from_ltrb(
        opts.insets.left as i32,
        opts.insets.top as i32,
        opts.width - opts.insets.right as i32,
        opts.height - opts.insets.bottom as i32,
    )
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn y_ticks(y: &ValueScale) -> Vec<f64> {
    let step = nice_step(y.vmax - y.vmin, TICK_TARGET);
    ticks(y.vmin, y.vmax, step)
}

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, band: &BandScale, y: &ValueScale, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals: band edges for bars, category positions for lines
    let xs: Vec<f32> = if band.offset {
        linspace(l as f64, r as f64, band.count + 1).into_iter().map(|x| x as f32).collect()
    } else {
        (0..band.count).map(|i| band.center(i)).collect()
    };
    for x in xs {
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals at value ticks
    for v in y_ticks(y) {
        let py = y.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_text_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    band: &BandScale,
    y: &ValueScale,
    chart: &Chart,
    theme: &Theme,
) {
    for v in y_ticks(y) {
        shaper.draw_right(canvas, &format_tick(v), plot.left as f32 - 6.0, y.to_px(v) + 4.0, FONT_SIZE, theme.tick);
    }
    for (i, name) in chart.categories.iter().enumerate() {
        shaper.draw_centered(canvas, name, band.center(i), plot.bottom as f32 + 16.0, FONT_SIZE, theme.tick);
    }
}

/// Lays legend entries out in centered rows; returns the height consumed.
fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, labels: &[String], plot: RectI32, theme: &Theme) -> i32 {
    if labels.is_empty() {
        return 0;
    }
    const DOT: f32 = 10.0;
    const GAP: f32 = 4.0;
    const PAD: f32 = 14.0;

    let max_w = plot.width().max(1) as f32;
    let mut rows: Vec<Vec<(usize, f32)>> = vec![Vec::new()];
    let mut row_w = 0.0f32;
    for (i, label) in labels.iter().enumerate() {
        let w = DOT + GAP + shaper.measure_width(label, FONT_SIZE) + PAD;
        let current = rows.last().map_or(0, Vec::len);
        if row_w + w > max_w && current > 0 {
            rows.push(Vec::new());
            row_w = 0.0;
        }
        if let Some(row) = rows.last_mut() {
            row.push((i, w));
        }
        row_w += w;
    }

    let mut dot = fill_paint(theme.palette[0]);
    for (r, row) in rows.iter().enumerate() {
        let total: f32 = row.iter().map(|(_, w)| w).sum();
        let mut x = plot.left as f32 + (max_w - total).max(0.0) * 0.5;
        let baseline = plot.top as f32 + LEGEND_ROW * (r as f32 + 1.0) - 4.0;
        for &(i, w) in row {
            dot.set_color(theme.slice_color(i));
            canvas.draw_circle((x + DOT * 0.5, baseline - 4.0), DOT * 0.5, &dot);
            shaper.draw_left(canvas, &labels[i], x + DOT + GAP, baseline, FONT_SIZE, theme.legend_text);
            x += w;
        }
    }
    (rows.len() as f32 * LEGEND_ROW + 6.0) as i32
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    band: &BandScale,
    y: &ValueScale,
    series: &Series,
    slot: usize,
    slots: usize,
    theme: &Theme,
) {
    let slots = slots.max(1) as f32;
    let group_w = band.bandwidth() * 0.8;
    let bar_w = group_w / slots * 0.9;
    let y0 = y.to_px(clamp(0.0, y.vmin, y.vmax));

    let fill = fill_paint(theme.fill);
    let border = stroke_paint(theme.stroke, series.style.border_width);

    for (i, &v) in series.values.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        let cx = band.center(i) - group_w * 0.5 + (slot as f32 + 0.5) * group_w / slots;
        let y1 = y.to_px(clamp(v, y.vmin, y.vmax));
        let rect = skia::Rect::from_ltrb(cx - bar_w * 0.5, y0.min(y1), cx + bar_w * 0.5, y0.max(y1));
        let radius = series.style.corner_radius.min(rect.width() * 0.5).min(rect.height() * 0.5);
        let rrect = skia::RRect::new_rect_xy(rect, radius, radius);
        canvas.draw_rrect(rrect, &fill);
        if series.style.border_width > 0.0 {
            canvas.draw_rrect(rrect, &border);
        }
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    band: &BandScale,
    y: &ValueScale,
    series: &Series,
    theme: &Theme,
) {
    let pts: Vec<Point> = series
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (band.center(i), y.to_px(v)))
        .collect();
    if pts.is_empty() {
        return;
    }

    if pts.len() >= 2 {
        let (top, bottom) = (plot.top as f32, plot.bottom as f32);
        let last = pts.len() - 1;
        // Controls are capped to the plot so the curve never overshoots it.
        let controls: Vec<(Point, Point)> = (0..pts.len())
            .map(|i| {
                let prev = pts[i.saturating_sub(1)];
                let next = pts[(i + 1).min(last)];
                let (a, b) = spline_controls(prev, pts[i], next, series.style.tension);
                ((a.0, clamp(a.1, top, bottom)), (b.0, clamp(b.1, top, bottom)))
            })
            .collect();

        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for i in 1..pts.len() {
            path.cubic_to(controls[i - 1].1, controls[i].0, pts[i]);
        }
        canvas.draw_path(&path, &stroke_paint(theme.stroke, series.style.border_width));
    }

    if series.style.point_radius > 0.0 {
        let fill = fill_paint(theme.point_fill);
        let ring = stroke_paint(theme.point_border, 1.0);
        for &p in &pts {
            canvas.draw_circle(p, series.style.point_radius, &fill);
            canvas.draw_circle(p, series.style.point_radius, &ring);
        }
    }
}

fn draw_doughnut(canvas: &skia::Canvas, plot: RectI32, series: &Series, theme: &Theme) {
    if plot.is_empty() {
        return;
    }
    let sweeps = series.slice_sweeps();
    if sweeps.is_empty() {
        return;
    }

    let (cx, cy) = plot.center();
    let outer = (plot.width().min(plot.height()) as f32 * 0.5 - series.style.border_width).max(1.0);
    let inner = outer * series.style.cutout;
    let outer_rect = skia::Rect::from_ltrb(cx - outer, cy - outer, cx + outer, cy + outer);
    let inner_rect = skia::Rect::from_ltrb(cx - inner, cy - inner, cx + inner, cy + inner);

    let mut fill = fill_paint(theme.slice_color(0));
    let border = stroke_paint(theme.stroke, series.style.border_width);

    // Slices start at twelve o'clock and run clockwise.
    let mut start = -90.0f32;
    for (i, &sweep) in sweeps.iter().enumerate() {
        if sweep <= 0.0 {
            continue;
        }
        let sweep = sweep.min(359.99);
        let mut path = skia::Path::new();
        path.arc_to(outer_rect, start, sweep, true);
        if inner > 0.0 {
            path.arc_to(inner_rect, start + sweep, -sweep, false);
        } else {
            path.line_to((cx, cy));
        }
        path.close();

        fill.set_color(theme.slice_color(i));
        canvas.draw_path(&path, &fill);
        if series.style.border_width > 0.0 {
            canvas.draw_path(&path, &border);
        }
        start += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoscale_begins_at_zero_and_snaps() {
        let chart = Chart::categorical(
            SeriesType::Bar,
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            vec![45_000.0, 52_000.0, 72_000.0],
        );
        assert_eq!(chart.y_axis.min, 0.0);
        assert_eq!(chart.y_axis.max, 80_000.0);
        assert_eq!(chart.x_axis.max, 2.0);
    }

    #[test]
    fn negative_values_extend_below_zero() {
        let chart = Chart::categorical(SeriesType::Line, vec!["a".into(), "b".into()], vec![-3.0, 7.0]);
        assert!(chart.y_axis.min <= -3.0);
        assert!(chart.y_axis.max >= 7.0);
    }

    #[test]
    fn huge_values_keep_a_finite_axis() {
        let chart = Chart::categorical(SeriesType::Bar, vec!["a".into()], vec![1.7e308]);
        assert_eq!(chart.y_axis.min, 0.0);
        assert_eq!(chart.y_axis.max, 1.7e308);
        assert!(!y_ticks(&ValueScale::new_linear(0.0, 100.0, chart.y_axis.min, chart.y_axis.max)).is_empty());
    }

    #[test]
    fn misaligned_series_is_rejected() {
        let mut chart = Chart::with_categories(vec!["a".into()]);
        chart.add_series(Series::with_values(SeriesType::Bar, vec![1.0, 2.0]));
        assert!(matches!(chart.validate(), Err(RenderError::Misaligned { values: 2, categories: 1, .. })));
    }

    #[test]
    fn plot_rect_respects_insets() {
        let opts = RenderOptions::default();
        let r = plot_rect(&opts);
        assert_eq!(r.left, 48);
        assert_eq!(r.right, WIDTH - 12);
        assert_eq!(r.bottom, HEIGHT - 30);
    }
}
