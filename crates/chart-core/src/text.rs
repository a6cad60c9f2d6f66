// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and draws labels in pixel space.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::geometry::RectF;

/// Size (pixels), color and weight of a piece of text.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of the laid-out text in pixels.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height().max(spec.size))
    }

    /// Box occupied by `text` whose top edge is at `top` and horizontal center at `cx`.
    pub fn centered_box(&self, text: &str, spec: &TextSpec, cx: f32, top: f32) -> RectF {
        let (w, h) = self.measure(text, spec);
        RectF::from_xywh(cx - w * 0.5, top, w, h)
    }

    /// Box occupied by `text` right-aligned at `right` and vertically centered on `cy`.
    pub fn right_box(&self, text: &str, spec: &TextSpec, right: f32, cy: f32) -> RectF {
        let (w, h) = self.measure(text, spec);
        RectF::from_xywh(right - w, cy - h * 0.5, w, h)
    }

    /// Draw with the paragraph's top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec) {
        let mut p = self.layout(text, spec);
        p.paint(canvas, (x, y));
    }

    pub fn draw_in(&self, canvas: &skia::Canvas, text: &str, rect: &RectF, spec: &TextSpec) {
        self.draw_top_left(canvas, text, rect.left, rect.top, spec);
    }

    /// Draw rotated 90 degrees counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_rotated_ccw(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, spec: &TextSpec) {
        let mut p = self.layout(text, spec);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
    }
}
