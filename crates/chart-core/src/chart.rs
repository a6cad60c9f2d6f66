// File: crates/chart-core/src/chart.rs
// Summary: Grouped/stacked bar chart model, pure layout, and headless PNG rendering using Skia CPU raster surfaces.

use log::info;
use skia_safe as skia;

use crate::axis::{Axis, CategoryAxis};
use crate::error::{RenderError, Result};
use crate::geometry::{clamp, RectF, RectI32};
use crate::scale::{CategoryScale, ValueScale};
use crate::series::BarSeries;
use crate::text::{TextShaper, TextSpec};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, POINTS_PER_INCH, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Pixels per typographic point; insets, strokes and font sizes are in points.
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Crop the output to the drawn content plus this padding (points).
    /// `None` keeps the full surface.
    pub tight_pad: Option<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            tight_pad: None,
        }
    }
}

impl RenderOptions {
    /// Surface sized from a physical figure size and resolution.
    pub fn from_inches(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self {
            width: (width_in * dpi).round() as i32,
            height: (height_in * dpi).round() as i32,
            scale: dpi / POINTS_PER_INCH,
            ..Self::default()
        }
    }

    /// Points to pixels.
    #[inline]
    pub fn px(&self, points: f32) -> f32 { points * self.scale }

    /// Plot area in pixels after insets.
    pub fn plot_rect(&self) -> RectF {
        RectF::from_ltrb(
            self.px(self.insets.left as f32),
            self.px(self.insets.top as f32),
            self.width as f32 - self.px(self.insets.right as f32),
            self.height as f32 - self.px(self.insets.bottom as f32),
        )
    }
}

/// Font sizes in points.
#[derive(Clone, Copy, Debug)]
pub struct FontSizes {
    pub title: f32,
    pub axis_label: f32,
    pub tick_label: f32,
    pub legend: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 16.0, axis_label: 14.0, tick_label: 12.0, legend: 12.0 }
    }
}

/// Legend anchored by its top-center edge below the plot area.
#[derive(Clone, Copy, Debug)]
pub struct Legend {
    pub columns: usize,
    /// Gap between the x-axis and the legend, as a fraction of plot height.
    pub offset_frac: f32,
}

impl Default for Legend {
    fn default() -> Self { Self { columns: 1, offset_frac: 0.05 } }
}

/// Horizontal grid lines at the value-axis ticks, drawn behind the bars.
#[derive(Clone, Copy, Debug)]
pub struct GridLines {
    pub alpha: f32,
}

pub struct Chart {
    pub title: Option<String>,
    pub x_axis: CategoryAxis,
    pub y_axis: Axis,
    pub series: Vec<BarSeries>,
    /// Bar width in category units.
    pub bar_width: f64,
    /// Horizontal padding around the bar extent, as a fraction of it.
    pub x_margin: f64,
    pub legend: Option<Legend>,
    pub grid: Option<GridLines>,
    pub fonts: FontSizes,
}

/// One drawn bar: pixel rect plus the data interval it represents.
#[derive(Clone, Debug)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    /// Slot offset in bar widths (shared by stacked segments).
    pub offset: f64,
    pub bottom: f64,
    pub top: f64,
    pub rect: RectF,
}

impl BarRect {
    pub fn value(&self) -> f64 { self.top - self.bottom }
}

#[derive(Clone, Debug)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
    pub label: String,
}

/// Text-independent geometry of a chart for one set of render options.
pub struct ChartLayout {
    pub plot: RectF,
    pub x_scale: CategoryScale,
    pub y_scale: ValueScale,
    pub bars: Vec<BarRect>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl ChartLayout {
    /// Total data height of the slot at `offset` in `category` (sum of its stacked segments).
    pub fn slot_total(&self, category: usize, offset: f64) -> f64 {
        self.bars
            .iter()
            .filter(|b| b.category == category && (b.offset - offset).abs() < 1e-9)
            .map(BarRect::value)
            .sum()
    }

    pub fn bars_in_category(&self, category: usize) -> impl Iterator<Item = &BarRect> {
        self.bars.iter().filter(move |b| b.category == category)
    }
}

impl Chart {
    pub fn new(x_axis: CategoryAxis) -> Self {
        Self {
            title: None,
            x_axis,
            y_axis: Axis::default_y(),
            series: Vec::new(),
            bar_width: 0.8,
            x_margin: 0.05,
            legend: None,
            grid: None,
            fonts: FontSizes::default(),
        }
    }

    pub fn add_series(&mut self, series: BarSeries) {
        self.series.push(series);
    }

    /// Check that every series has one value (and bottom) per category.
    pub fn validate(&self) -> Result<()> {
        let expected = self.x_axis.len();
        if expected == 0 {
            return Err(RenderError::NoCategories);
        }
        for s in &self.series {
            if s.values.len() != expected {
                return Err(RenderError::SeriesLength { label: s.label.clone(), got: s.values.len(), expected });
            }
            if let Some(b) = &s.bottoms {
                if b.len() != expected {
                    return Err(RenderError::BottomsLength { label: s.label.clone(), got: b.len(), expected });
                }
            }
        }
        Ok(())
    }

    /// Center of a bar in category coordinates.
    pub fn bar_center(&self, category: usize, offset: f64) -> f64 {
        category as f64 + offset * self.bar_width
    }

    /// Category-coordinate range covering every bar plus `x_margin` on each side.
    pub fn x_range(&self) -> (f64, f64) {
        let n = self.x_axis.len();
        let half = self.bar_width * 0.5;
        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            lo = lo.min(self.bar_center(0, s.offset) - half);
            hi = hi.max(self.bar_center(n.saturating_sub(1), s.offset) + half);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = -0.5;
            hi = n.saturating_sub(1) as f64 + 0.5;
        }
        let m = (hi - lo) * self.x_margin;
        (lo - m, hi + m)
    }

    pub fn layout(&self, opts: &RenderOptions) -> Result<ChartLayout> {
        self.validate()?;
        let plot = opts.plot_rect();
        let (x_min, x_max) = self.x_range();
        let x_scale = CategoryScale::new(plot.left, plot.right, x_min, x_max);
        let y_scale = ValueScale::new_linear(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);

        let bar_px = x_scale.width_px(self.bar_width);
        let mut bars = Vec::with_capacity(self.series.len() * self.x_axis.len());
        for (si, s) in self.series.iter().enumerate() {
            for ci in 0..self.x_axis.len() {
                let (bottom, top) = (s.bottom(ci), s.top(ci));
                let cx = x_scale.to_px(self.bar_center(ci, s.offset));
                let (y0, y1) = (y_scale.to_px(bottom), y_scale.to_px(top));
                bars.push(BarRect {
                    series: si,
                    category: ci,
                    offset: s.offset,
                    bottom,
                    top,
                    rect: RectF::from_ltrb(cx - bar_px * 0.5, y0.min(y1), cx + bar_px * 0.5, y0.max(y1)),
                });
            }
        }

        let x_ticks = self
            .x_axis
            .categories
            .iter()
            .enumerate()
            .map(|(i, name)| Tick { value: i as f64, px: x_scale.to_px(i as f64), label: name.clone() })
            .collect();
        let y_ticks = self
            .y_axis
            .tick_labels()
            .into_iter()
            .map(|(v, label)| Tick { value: v, px: y_scale.to_px(v), label })
            .collect();

        info!(
            "layout: plot {:.0}x{:.0}px, {} bars, x range [{:.3}, {:.3}]",
            plot.width(),
            plot.height(),
            bars.len(),
            x_min,
            x_max
        );
        Ok(ChartLayout { plot, x_scale, y_scale, bars, x_ticks, y_ticks })
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// The parent directory must already exist.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(path, &bytes)
            .map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render to encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (mut surface, crop) = self.rasterize(opts)?;
        let image = surface
            .image_snapshot_with_bounds(skia::IRect::from_ltrb(crop.left, crop.top, crop.right, crop.bottom))
            .ok_or(RenderError::Encode)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (mut surface, crop) = self.rasterize(opts)?;
        let (w, h) = (crop.width(), crop.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (crop.left, crop.top)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Pixel region kept in the output: the drawn content padded by `tight_pad`,
    /// or the full surface when `tight_pad` is `None`.
    pub fn crop_rect(&self, opts: &RenderOptions) -> Result<RectI32> {
        let layout = self.layout(opts)?;
        let labels = opts.draw_labels.then(|| self.label_layout(&TextShaper::new(), &layout, opts));
        Ok(crop_for(&layout, labels.as_ref(), opts))
    }

    /// Draw everything and return the surface with the region to keep.
    fn rasterize(&self, opts: &RenderOptions) -> Result<(skia::Surface, RectI32)> {
        let layout = self.layout(opts)?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        if let Some(grid) = self.grid {
            draw_grid(canvas, &layout, opts, grid);
        }
        draw_bars(canvas, &layout, &self.series);
        draw_axes(canvas, &layout, opts);

        let labels = if opts.draw_labels {
            let shaper = TextShaper::new();
            let labels = self.label_layout(&shaper, &layout, opts);
            self.draw_labels(canvas, &shaper, &labels, opts);
            Some(labels)
        } else {
            None
        };

        let crop = crop_for(&layout, labels.as_ref(), opts);
        Ok((surface, crop))
    }

    fn text_specs(&self, opts: &RenderOptions) -> TextSpecs {
        let theme = &opts.theme;
        TextSpecs {
            tick: TextSpec::new(opts.px(self.fonts.tick_label), theme.tick),
            axis_label: TextSpec::new(opts.px(self.fonts.axis_label), theme.axis_label).bold(),
            title: TextSpec::new(opts.px(self.fonts.title), theme.title).bold(),
            legend: TextSpec::new(opts.px(self.fonts.legend), theme.axis_label),
        }
    }

    /// Place tick labels, axis labels, title and legend around the plot. Measures text, draws nothing.
    pub fn label_layout(&self, shaper: &TextShaper, layout: &ChartLayout, opts: &RenderOptions) -> LabelLayout {
        let specs = self.text_specs(opts);
        let plot = layout.plot;
        let gap = opts.px(TICK_LEN + TICK_PAD);

        let x_ticks: Vec<TextBox> = layout
            .x_ticks
            .iter()
            .map(|t| TextBox::new(&t.label, shaper.centered_box(&t.label, &specs.tick, t.px, plot.bottom + gap)))
            .collect();
        let x_labels_bottom = x_ticks.iter().map(|b| b.rect.bottom).fold(plot.bottom + gap, f32::max);

        let y_ticks: Vec<TextBox> = layout
            .y_ticks
            .iter()
            .map(|t| TextBox::new(&t.label, shaper.right_box(&t.label, &specs.tick, plot.left - gap, t.px)))
            .collect();
        let y_labels_left = y_ticks.iter().map(|b| b.rect.left).fold(plot.left - gap, f32::min);

        let x_label = (!self.x_axis.label.is_empty()).then(|| {
            let top = x_labels_bottom + opts.px(LABEL_PAD);
            TextBox::new(&self.x_axis.label, shaper.centered_box(&self.x_axis.label, &specs.axis_label, plot.center_x(), top))
        });

        // Rotated: the box is the text's footprint after turning it upright.
        let y_label = (!self.y_axis.label.is_empty()).then(|| {
            let (w, h) = shaper.measure(&self.y_axis.label, &specs.axis_label);
            let cx = y_labels_left - opts.px(LABEL_PAD) - h * 0.5;
            let cy = (plot.top + plot.bottom) * 0.5;
            TextBox::new(&self.y_axis.label, RectF::from_ltrb(cx - h * 0.5, cy - w * 0.5, cx + h * 0.5, cy + w * 0.5))
        });

        let title = self.title.as_ref().map(|title| {
            let (_, h) = shaper.measure(title, &specs.title);
            TextBox::new(title, shaper.centered_box(title, &specs.title, plot.center_x(), plot.top - opts.px(TITLE_PAD) - h))
        });

        let below_axis = x_label.as_ref().map_or(x_labels_bottom, |b| b.rect.bottom);
        let legend = self.legend.map(|legend| {
            let top = (plot.bottom + plot.height() * legend.offset_frac).max(below_axis + opts.px(LABEL_PAD));
            self.legend_layout(shaper, &specs.legend, legend, plot.center_x(), top)
        });

        LabelLayout { x_ticks, y_ticks, x_label, y_label, title, legend }
    }

    /// Legend laid out in `columns` columns with its top-center at `(cx, top)`.
    fn legend_layout(&self, shaper: &TextShaper, spec: &TextSpec, legend: Legend, cx: f32, top: f32) -> LegendLayout {
        let em = spec.size;
        let (handle_w, handle_h) = (2.0 * em, 0.7 * em);
        let (text_pad, col_gap, border_pad) = (0.8 * em, 2.0 * em, 0.4 * em);

        let columns = legend.columns.clamp(1, self.series.len().max(1));
        let sizes: Vec<(f32, f32)> = self.series.iter().map(|s| shaper.measure(&s.label, spec)).collect();
        let row_h = sizes.iter().map(|&(_, h)| h).fold(em, f32::max);
        let rows = self.series.len().div_ceil(columns);

        // Column widths are the widest entry in each column.
        let mut col_w = vec![0.0f32; columns];
        for (i, &(w, _)) in sizes.iter().enumerate() {
            let c = i % columns;
            col_w[c] = col_w[c].max(handle_w + text_pad + w);
        }
        let inner_w = col_w.iter().sum::<f32>() + col_gap * (columns.saturating_sub(1)) as f32;
        let frame = RectF::from_xywh(
            cx - inner_w * 0.5 - border_pad,
            top,
            inner_w + 2.0 * border_pad,
            rows as f32 * row_h + 2.0 * border_pad,
        );

        let entries = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (row, col) = (i / columns, i % columns);
                let x = frame.left + border_pad + col_w[..col].iter().sum::<f32>() + col_gap * col as f32;
                let y = frame.top + border_pad + row as f32 * row_h;
                let (w, h) = sizes[i];
                LegendEntry {
                    series: i,
                    row,
                    handle: RectF::from_xywh(x, y + (row_h - handle_h) * 0.5, handle_w, handle_h),
                    text: TextBox::new(&s.label, RectF::from_xywh(x + handle_w + text_pad, y + (row_h - h) * 0.5, w, h)),
                }
            })
            .collect();
        LegendLayout { frame, rows, columns, entries }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, shaper: &TextShaper, labels: &LabelLayout, opts: &RenderOptions) {
        let specs = self.text_specs(opts);
        for b in labels.x_ticks.iter().chain(&labels.y_ticks) {
            shaper.draw_in(canvas, &b.text, &b.rect, &specs.tick);
        }
        if let Some(b) = &labels.x_label {
            shaper.draw_in(canvas, &b.text, &b.rect, &specs.axis_label);
        }
        if let Some(b) = &labels.y_label {
            let cy = (b.rect.top + b.rect.bottom) * 0.5;
            shaper.draw_rotated_ccw(canvas, &b.text, b.rect.center_x(), cy, &specs.axis_label);
        }
        if let Some(b) = &labels.title {
            shaper.draw_in(canvas, &b.text, &b.rect, &specs.title);
        }
        if let Some(legend) = &labels.legend {
            draw_legend(canvas, shaper, legend, &self.series, opts, &specs.legend);
        }
    }
}

struct TextSpecs {
    tick: TextSpec,
    axis_label: TextSpec,
    title: TextSpec,
    legend: TextSpec,
}

/// A piece of text and the pixel box it occupies.
#[derive(Clone, Debug)]
pub struct TextBox {
    pub text: String,
    pub rect: RectF,
}

impl TextBox {
    fn new(text: &str, rect: RectF) -> Self {
        Self { text: text.to_string(), rect }
    }
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub series: usize,
    pub row: usize,
    pub handle: RectF,
    pub text: TextBox,
}

#[derive(Clone, Debug)]
pub struct LegendLayout {
    pub frame: RectF,
    pub rows: usize,
    pub columns: usize,
    pub entries: Vec<LegendEntry>,
}

/// Text placement around the plot area.
#[derive(Clone, Debug)]
pub struct LabelLayout {
    pub x_ticks: Vec<TextBox>,
    pub y_ticks: Vec<TextBox>,
    pub x_label: Option<TextBox>,
    /// Box of the rotated label as drawn.
    pub y_label: Option<TextBox>,
    pub title: Option<TextBox>,
    pub legend: Option<LegendLayout>,
}

impl LabelLayout {
    /// Union of every text box and the legend frame with `base`.
    pub fn bounds(&self, base: RectF) -> RectF {
        let text = self
            .x_ticks
            .iter()
            .chain(&self.y_ticks)
            .chain(&self.x_label)
            .chain(&self.y_label)
            .chain(&self.title)
            .fold(base, |acc, b| acc.union(&b.rect));
        match &self.legend {
            Some(l) => text.union(&l.frame),
            None => text,
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Tick mark length, points.
const TICK_LEN: f32 = 3.5;
/// Gap between tick mark and tick label, points.
const TICK_PAD: f32 = 3.5;
/// Gap between tick labels and axis label, points.
const LABEL_PAD: f32 = 4.0;
/// Gap between plot top and title, points.
const TITLE_PAD: f32 = 6.0;
/// Spine, tick and grid stroke width, points.
const LINE_WIDTH: f32 = 0.8;

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions, grid: GridLines) {
    let plot = layout.plot;
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid.with_a((clamp(grid.alpha, 0.0, 1.0) * 255.0).round() as u8));
    paint.set_anti_alias(true);
    paint.set_stroke_width(opts.px(LINE_WIDTH));

    for t in &layout.y_ticks {
        canvas.draw_line((plot.left, t.px), (plot.right, t.px), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, layout: &ChartLayout, series: &[BarSeries]) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    canvas.save();
    canvas.clip_rect(skia::Rect::from(layout.plot), skia::ClipOp::Intersect, true);
    for bar in &layout.bars {
        fill.set_color(series[bar.series].fill_color());
        canvas.draw_rect(skia::Rect::from(bar.rect), &fill);
    }
    canvas.restore();
}

fn draw_axes(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions) {
    let plot = layout.plot;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(opts.px(LINE_WIDTH));

    // Spines
    canvas.draw_rect(skia::Rect::from(plot), &axis_paint);

    // Outward tick marks
    let len = opts.px(TICK_LEN);
    axis_paint.set_color(opts.theme.tick);
    for t in &layout.x_ticks {
        canvas.draw_line((t.px, plot.bottom), (t.px, plot.bottom + len), &axis_paint);
    }
    for t in &layout.y_ticks {
        canvas.draw_line((plot.left - len, t.px), (plot.left, t.px), &axis_paint);
    }
}

fn crop_for(layout: &ChartLayout, labels: Option<&LabelLayout>, opts: &RenderOptions) -> RectI32 {
    let mut content = layout.plot.outset(opts.px(TICK_LEN));
    if let Some(labels) = labels {
        content = labels.bounds(content);
    }
    let full = RectI32::from_ltwh(0, 0, opts.width, opts.height);
    match opts.tight_pad {
        Some(pad) => content.outset(opts.px(pad)).round_out().intersect(&full).unwrap_or(full),
        None => full,
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    legend: &LegendLayout,
    series: &[BarSeries],
    opts: &RenderOptions,
    spec: &TextSpec,
) {
    let theme = &opts.theme;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(theme.legend_background);
    canvas.draw_rect(skia::Rect::from(legend.frame), &paint);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(opts.px(LINE_WIDTH));
    paint.set_color(theme.legend_border);
    canvas.draw_rect(skia::Rect::from(legend.frame), &paint);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    for entry in &legend.entries {
        fill.set_color(series[entry.series].fill_color());
        canvas.draw_rect(skia::Rect::from(entry.handle), &fill);
        shaper.draw_in(canvas, &entry.text.text, &entry.text.rect, spec);
    }
}
