// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Multipliers tried for each power of ten when picking a tick step.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Tick values covering `[min, max]` with a "nice" step, using at most
/// `max_intervals` intervals. Ticks lie on multiples of the step and stay
/// inside the range.
pub fn nice_ticks(min: f64, max: f64, max_intervals: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || max_intervals == 0 {
        return vec![min];
    }
    let raw = span / max_intervals as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
