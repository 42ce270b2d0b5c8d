// File: crates/chart-core/src/series.rs
// Summary: Series model for categorical line, bar and doughnut data plus per-type styling.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,
    Doughnut,
}

impl SeriesType {
    /// Radial series have no cartesian axes.
    pub fn is_radial(&self) -> bool {
        matches!(self, SeriesType::Doughnut)
    }
}

/// Stroke/shape parameters applied on top of the theme colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub border_width: f32,
    /// Bezier smoothing for lines; 0 draws straight segments.
    pub tension: f32,
    pub corner_radius: f32,
    pub point_radius: f32,
    /// Inner radius of a doughnut as a fraction of the outer one.
    pub cutout: f32,
}

impl SeriesStyle {
    pub fn for_type(series_type: SeriesType) -> Self {
        let base = Self { border_width: 2.0, tension: 0.0, corner_radius: 0.0, point_radius: 0.0, cutout: 0.0 };
        match series_type {
            SeriesType::Line => Self { tension: 0.4, point_radius: 3.0, ..base },
            SeriesType::Bar => Self { corner_radius: 4.0, ..base },
            SeriesType::Doughnut => Self { cutout: 0.5, ..base },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: String,
    /// One value per chart category, index aligned.
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, name: "Data".to_string(), values: Vec::new(), style: SeriesStyle::for_type(series_type) }
    }

    pub fn with_values(series_type: SeriesType, values: Vec<f64>) -> Self {
        Self { values, ..Self::new(series_type) }
    }

    /// (min, max) over finite values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Slice sweep angles in degrees, proportional to absolute values.
    /// Empty when every value is zero.
    pub fn slice_sweeps(&self) -> Vec<f32> {
        let total: f64 = self.values.iter().map(|v| v.abs()).filter(|v| v.is_finite()).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        self.values
            .iter()
            .map(|v| if v.is_finite() { (v.abs() / total * 360.0) as f32 } else { 0.0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_per_type() {
        assert_eq!(SeriesStyle::for_type(SeriesType::Line).tension, 0.4);
        assert_eq!(SeriesStyle::for_type(SeriesType::Bar).corner_radius, 4.0);
        assert_eq!(SeriesStyle::for_type(SeriesType::Bar).tension, 0.0);
        assert_eq!(SeriesStyle::for_type(SeriesType::Doughnut).cutout, 0.5);
    }

    #[test]
    fn sweeps_sum_to_full_turn() {
        let s = Series::with_values(SeriesType::Doughnut, vec![55.0, 33.0, 12.0]);
        let sweeps = s.slice_sweeps();
        assert_eq!(sweeps.len(), 3);
        assert!((sweeps.iter().sum::<f32>() - 360.0).abs() < 1e-3);
        assert!(Series::with_values(SeriesType::Doughnut, vec![0.0, 0.0]).slice_sweeps().is_empty());
    }

    #[test]
    fn range_ignores_non_finite() {
        let s = Series::with_values(SeriesType::Bar, vec![3.0, f64::NAN, -2.0]);
        assert_eq!(s.value_range(), Some((-2.0, 3.0)));
        assert_eq!(Series::new(SeriesType::Bar).value_range(), None);
    }
}
