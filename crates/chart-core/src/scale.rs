// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scale transforms.

/// Category coordinate: category index plus a fractional slot offset.
pub type Logical = f64;
/// Value Y coordinate (e.g., dollars).
pub type Value = f64;

/// Horizontal scale mapping the category range `[min, max]` onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: Logical,
    pub max: Logical,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, min: Logical, max: Logical) -> Self {
        let mut s = Self { left_px, right_px, min, max };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        let span = self.max - self.min;
        self.left_px + ((x - self.min) / span) as f32 * (self.right_px - self.left_px)
    }
    /// Pixel width of `w` logical units.
    #[inline]
    pub fn width_px(&self, w: Logical) -> f32 {
        (w / (self.max - self.min)) as f32 * (self.right_px - self.left_px)
    }
}

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
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_maps_ends() {
        let s = ValueScale::new_linear(10.0, 110.0, 0.0, 6_000_000.0);
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(6_000_000.0), 10.0);
        assert_eq!(s.to_px(3_000_000.0), 60.0);
    }

    #[test]
    fn category_scale_widths() {
        let s = CategoryScale::new(0.0, 100.0, -0.5, 4.5);
        assert_eq!(s.to_px(-0.5), 0.0);
        assert_eq!(s.to_px(2.0), 50.0);
        assert!((s.width_px(0.2) - 4.0).abs() < 1e-4);
    }
}
