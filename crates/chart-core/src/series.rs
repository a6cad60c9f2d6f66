// File: crates/chart-core/src/series.rs
// Summary: Bar series model: one value per category, optional stacking baseline and slot offset.

use skia_safe as skia;

#[derive(Clone)]
pub struct BarSeries {
    pub label: String,
    pub values: Vec<f64>,
    /// Per-category baseline; `None` means every bar starts at 0.0.
    pub bottoms: Option<Vec<f64>>,
    /// Horizontal offset from the category center, in bar widths.
    pub offset: f64,
    pub color: skia::Color,
    /// Fill opacity in [0, 1].
    pub alpha: f32,
}

impl BarSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            bottoms: None,
            offset: 0.0,
            color: skia::Color::from_rgb(31, 119, 180),
            alpha: 1.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Stack this series on top of `below`: same slot, bottoms at `below`'s tops.
    pub fn stacked_on(mut self, below: &BarSeries) -> Self {
        self.offset = below.offset;
        self.bottoms = Some((0..below.values.len()).map(|i| below.top(i)).collect());
        self
    }

    /// Baseline of the bar at category `i`.
    pub fn bottom(&self, i: usize) -> f64 {
        self.bottoms.as_ref().and_then(|b| b.get(i).copied()).unwrap_or(0.0)
    }

    /// Upper edge of the bar at category `i`.
    pub fn top(&self, i: usize) -> f64 {
        self.bottom(i) + self.values.get(i).copied().unwrap_or(0.0)
    }

    /// Fill color with `alpha` applied.
    pub fn fill_color(&self) -> skia::Color {
        self.color.with_a((self.alpha * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_bottoms_follow_lower_tops() {
        let lower = BarSeries::new("a", vec![1.0, 2.0, 3.0]).with_offset(0.5);
        let upper = BarSeries::new("b", vec![10.0, 20.0, 30.0]).stacked_on(&lower);
        assert_eq!(upper.offset, 0.5);
        assert_eq!(upper.bottom(1), 2.0);
        assert_eq!(upper.top(2), 33.0);
    }

    #[test]
    fn unstacked_starts_at_zero() {
        let s = BarSeries::new("a", vec![5.0]);
        assert_eq!(s.bottom(0), 0.0);
        assert_eq!(s.top(0), 5.0);
    }

    #[test]
    fn alpha_is_applied_to_fill() {
        let s = BarSeries::new("a", vec![]).with_color(skia::Color::from_rgb(255, 0, 0)).with_alpha(0.8);
        assert_eq!(s.fill_color().a(), 204);
        assert_eq!(s.fill_color().r(), 255);
    }
}
