// File: crates/financial-report/src/config.rs
// Summary: Fixed report settings (figure size, resolution, axis ceiling, output path).

use std::path::PathBuf;

use chart_core::{Insets, RenderOptions};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FINANCIAL_REPORT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn,financial_graph=info,financial_report=info,chart_core=info";

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Relative to the working directory.
    pub output_path: PathBuf,
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    /// Padding around the tight bounding box, inches.
    pub pad_in: f32,
    pub y_max: f64,
    /// Bar width in category units.
    pub bar_width: f64,
    pub alpha: f32,
    /// Plot margins in points (1/72 in). They leave room for tick labels,
    /// axis labels, the title and the legend before the tight crop.
    pub margin_left_pt: u32,
    pub margin_right_pt: u32,
    pub margin_top_pt: u32,
    pub margin_bottom_pt: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("../img/financial_graph.png"),
            width_in: 14.0,
            height_in: 10.0,
            dpi: 300.0,
            pad_in: 0.1,
            y_max: 6_000_000.0,
            bar_width: 0.2,
            alpha: 0.8,
            margin_left_pt: 84,
            margin_right_pt: 24,
            margin_top_pt: 44,
            margin_bottom_pt: 100,
        }
    }
}

impl ReportConfig {
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::from_inches(self.width_in, self.height_in, self.dpi);
        opts.insets = Insets::new(
            self.margin_left_pt,
            self.margin_right_pt,
            self.margin_top_pt,
            self.margin_bottom_pt,
        );
        opts.tight_pad = Some(self.pad_in * chart_core::types::POINTS_PER_INCH);
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_become_insets_in_points() {
        let cfg = ReportConfig { margin_left_pt: 90, margin_bottom_pt: 120, ..ReportConfig::default() };
        let opts = cfg.render_options();
        assert_eq!(opts.insets, Insets::new(90, 24, 44, 120));
        let plot = opts.plot_rect();
        assert!((plot.left - 90.0 * opts.scale).abs() < 1e-3);
        assert!((opts.height as f32 - plot.bottom - 120.0 * opts.scale).abs() < 1e-3);
    }

    #[test]
    fn default_filter_covers_binary_and_libraries() {
        for target in ["financial_graph=info", "financial_report=info", "chart_core=info"] {
            assert!(DEFAULT_LOG_FILTER.split(',').any(|d| d == target), "{target}");
        }
    }
}
