// File: crates/chart-core/src/axis.rs
// Summary: Axis range model and tick label formatting.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    /// Autoscale keeps zero inside the range.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, begin_at_zero: false }
    }

    /// Category axis; range is index based and filled by autoscale.
    pub fn default_x() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Value axis anchored at zero.
    pub fn default_y() -> Self {
        let mut a = Self::new(0.0, 1.0);
        a.begin_at_zero = true;
        a
    }
}

/// Tick label text: `1.5M` from a million up, `45.0K` from a thousand up, plain below.
pub fn format_tick(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_plain(value)
    }
}

/// Shortest fixed-point rendering with at most four decimals.
pub fn format_plain(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_values_get_suffixes() {
        assert_eq!(format_tick(45_000.0), "45.0K");
        assert_eq!(format_tick(1_000.0), "1.0K");
        assert_eq!(format_tick(2_500_000.0), "2.5M");
    }

    #[test]
    fn small_values_stay_plain() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(0.30000000000000004), "0.3");
        assert_eq!(format_tick(-1500.0), "-1500");
    }
}
