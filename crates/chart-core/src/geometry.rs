// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Integer pixel rectangle, used for crop bounds.
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

    /// Intersection with `other`; `None` when the overlap is empty.
    pub fn intersect(&self, other: &RectI32) -> Option<RectI32> {
        let r = RectI32::from_ltrb(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if r.width() > 0 && r.height() > 0 { Some(r) } else { None }
    }
}

/// Floating-point pixel rectangle (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    /// Smallest rect containing both.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF::from_ltrb(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub fn outset(&self, pad: f32) -> RectF {
        RectF::from_ltrb(self.left - pad, self.top - pad, self.right + pad, self.bottom + pad)
    }

    /// Expand outwards to whole pixels.
    pub fn round_out(&self) -> RectI32 {
        RectI32::from_ltrb(
            self.left.floor() as i32,
            self.top.floor() as i32,
            self.right.ceil() as i32,
            self.bottom.ceil() as i32,
        )
    }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self {
        skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
