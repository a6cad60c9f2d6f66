// File: crates/financial-report/src/figure.rs
// Summary: Builds the grouped/stacked bar chart for the metrics table.

use chart_core::{
    named_color, Axis, BarSeries, CategoryAxis, Chart, FontSizes, GridLines, Legend, TickFormat,
};

use crate::config::ReportConfig;
use crate::metrics::MetricsTable;

pub const TITLE: &str = "5-Year Growth & Performance";

/// Slot offsets in bar widths: Users, Revenue, COGS/SG&A stack, EBITA.
pub const SLOT_OFFSETS: [f64; 4] = [-1.5, -0.5, 0.5, 1.5];

/// Offset of the stacked COGS + SG&A slot.
pub const STACK_OFFSET: f64 = SLOT_OFFSETS[2];

fn color(name: &str) -> chart_core::skia::Color {
    named_color(name).unwrap_or(chart_core::skia::Color::BLACK)
}

pub fn build_chart(table: &MetricsTable, cfg: &ReportConfig) -> Chart {
    let mut chart = Chart::new(CategoryAxis::new("Year", table.years()));
    chart.title = Some(TITLE.to_string());
    chart.y_axis = Axis::new("US $", 0.0, cfg.y_max).with_format(TickFormat::UsdMillions { decimals: 1 });
    chart.bar_width = cfg.bar_width;
    chart.grid = Some(GridLines { alpha: 0.3 });
    chart.legend = Some(Legend { columns: 5, offset_frac: 0.05 });
    chart.fonts = FontSizes { title: 16.0, axis_label: 14.0, tick_label: 12.0, legend: 12.0 };

    let bar = |label: &str, values: Vec<f64>, name: &str| {
        BarSeries::new(label, values).with_color(color(name)).with_alpha(cfg.alpha)
    };

    let users = bar("Users", table.column(|r| r.users_scaled), "green").with_offset(SLOT_OFFSETS[0]);
    let revenue = bar("Revenue", table.column(|r| r.input.revenue as f64), "red").with_offset(SLOT_OFFSETS[1]);
    let cogs = bar("COGS", table.column(|r| r.input.cogs as f64), "skyblue").with_offset(STACK_OFFSET);
    let sgsa = bar("SG&A", table.column(|r| r.input.sgsa as f64), "blue").stacked_on(&cogs);
    let ebita = bar("EBITA", table.column(|r| r.input.ebita as f64), "yellow").with_offset(SLOT_OFFSETS[3]);

    for s in [users, revenue, cogs, sgsa, ebita] {
        chart.add_series(s);
    }
    chart
}
