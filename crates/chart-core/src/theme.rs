// File: crates/chart-core/src/theme.rs
// Summary: Color themes for chart rendering (pink default, dark, light).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub legend_text: skia::Color,
    /// Bar body fill.
    pub fill: skia::Color,
    /// Line stroke and bar/slice border.
    pub stroke: skia::Color,
    pub point_fill: skia::Color,
    pub point_border: skia::Color,
    /// Doughnut slice colors, cycled when there are more slices.
    pub palette: [skia::Color; 5],
}

impl Theme {
    pub fn pink() -> Self {
        let hot_pink = skia::Color::from_argb(255, 0xff, 0x69, 0xb4);
        Self {
            name: "pink",
            background: skia::Color::from_argb(255, 20, 16, 28),
            grid: skia::Color::from_argb(26, 255, 255, 255),
            axis_line: skia::Color::from_argb(51, 255, 255, 255),
            tick: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            legend_text: skia::Color::from_argb(255, 0xe0, 0xe0, 0xe0),
            fill: skia::Color::from_argb(153, 0xff, 0x69, 0xb4),
            stroke: hot_pink,
            point_fill: hot_pink,
            point_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            palette: [
                hot_pink,
                skia::Color::from_argb(255, 0xff, 0x14, 0x93),
                skia::Color::from_argb(255, 0xc7, 0x15, 0x85),
                skia::Color::from_argb(255, 0xd8, 0xbf, 0xd8),
                skia::Color::from_argb(255, 0xdd, 0xa0, 0xdd),
            ],
        }
    }

    pub fn dark() -> Self {
        let blue = skia::Color::from_argb(255, 64, 160, 255);
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            fill: skia::Color::from_argb(160, 64, 160, 255),
            stroke: blue,
            point_fill: blue,
            point_border: skia::Color::from_argb(255, 235, 235, 245),
            palette: [
                blue,
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 160, 110, 255),
            ],
        }
    }

    pub fn light() -> Self {
        let blue = skia::Color::from_argb(255, 32, 120, 200);
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
            fill: skia::Color::from_argb(150, 32, 120, 200),
            stroke: blue,
            point_fill: blue,
            point_border: skia::Color::from_argb(255, 255, 255, 255),
            palette: [
                blue,
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 230, 160, 20),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 120, 80, 200),
            ],
        }
    }

    /// Slice color for index `i`, cycling through the palette.
    pub fn slice_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::pink() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::pink(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to pink.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::pink()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "pink");
    }

    #[test]
    fn palette_cycles() {
        let t = Theme::pink();
        assert_eq!(t.slice_color(5), t.slice_color(0));
        assert_eq!(t.slice_color(1), skia::Color::from_argb(255, 0xff, 0x14, 0x93));
    }
}
