// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round step (1, 2 or 5 times a power of ten) giving about `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Expand `[min, max]` outward to multiples of `step`.
pub fn snap_range(min: f64, max: f64, step: f64) -> (f64, f64) {
    ((min / step).floor() * step, (max / step).ceil() * step)
}

/// Upper bound on ticks along one axis.
pub const MAX_TICKS: i64 = 1000;

/// Tick values at multiples of `step` inside `[min, max]`.
/// Empty for non-finite bounds or when more than `MAX_TICKS` would be produced.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    if last.saturating_sub(first) > MAX_TICKS {
        return Vec::new();
    }
    (first..=last).map(|k| k as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_round() {
        assert_eq!(nice_step(72_000.0, 5), 20_000.0);
        assert!((nice_step(1.0, 5) - 0.2).abs() < 1e-12);
        assert_eq!(nice_step(0.0, 5), 1.0);
    }

    #[test]
    fn ticks_cover_snapped_range() {
        let (lo, hi) = snap_range(0.0, 72_000.0, 20_000.0);
        assert_eq!((lo, hi), (0.0, 80_000.0));
        assert_eq!(ticks(lo, hi, 20_000.0), vec![0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0]);
    }

    #[test]
    fn unbounded_ranges_yield_no_ticks() {
        assert!(ticks(0.0, f64::INFINITY, 1.0).is_empty());
        assert!(ticks(f64::NEG_INFINITY, 0.0, 1.0).is_empty());
        assert!(ticks(0.0, 1e300, 1.0).is_empty());
        assert_eq!(ticks(0.0, 1000.0, 1.0).len(), 1001);
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
        assert_eq!(linspace(2.0, 4.0, 1), vec![2.0, 4.0]);
    }
}
