// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for bar chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{
    BarRect, Chart, ChartLayout, FontSizes, GridLines, LabelLayout, Legend, LegendEntry, LegendLayout,
    RenderOptions, TextBox, Tick,
};
pub use series::BarSeries;
pub use axis::{usd_millions, Axis, CategoryAxis, TickFormat};
pub use error::{RenderError, Result};
pub use theme::{named_color, Theme};
pub use text::{TextShaper, TextSpec};
pub use types::Insets;
pub use skia_safe as skia;
