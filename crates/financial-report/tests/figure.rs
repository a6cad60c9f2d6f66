// File: crates/financial-report/tests/figure.rs
// Purpose: Validate the report chart's series, stacking and fixed axis against the metrics table.

use chart_core::{RenderOptions, TextShaper};
use financial_report::figure::{build_chart, SLOT_OFFSETS, STACK_OFFSET, TITLE};
use financial_report::{MetricsTable, ReportConfig};

fn layout_opts() -> RenderOptions {
    let mut opts = ReportConfig::default().render_options();
    opts.draw_labels = false;
    opts
}

#[test]
fn series_order_and_slots() {
    let chart = build_chart(&MetricsTable::fixed(), &ReportConfig::default());
    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Users", "Revenue", "COGS", "SG&A", "EBITA"]);
    let offsets: Vec<f64> = chart.series.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, [SLOT_OFFSETS[0], SLOT_OFFSETS[1], STACK_OFFSET, STACK_OFFSET, SLOT_OFFSETS[3]]);
    assert_eq!(chart.title.as_deref(), Some(TITLE));
    assert_eq!(chart.bar_width, 0.2);
    assert_eq!(chart.legend.map(|l| l.columns), Some(5));
}

#[test]
fn stacked_slot_totals_equal_combined_cost() {
    let table = MetricsTable::fixed();
    let chart = build_chart(&table, &ReportConfig::default());
    let layout = chart.layout(&layout_opts()).expect("layout");
    for (i, row) in table.rows().iter().enumerate() {
        assert_eq!(layout.slot_total(i, STACK_OFFSET), row.cogs_sgsa as f64);
        let sgsa = layout.bars.iter().find(|b| b.series == 3 && b.category == i).unwrap();
        assert_eq!(sgsa.bottom, row.input.cogs as f64);
    }
}

#[test]
fn users_bar_uses_scaled_values() {
    let table = MetricsTable::fixed();
    let chart = build_chart(&table, &ReportConfig::default());
    let layout = chart.layout(&layout_opts()).expect("layout");
    let last = layout.bars.iter().find(|b| b.series == 0 && b.category == 4).unwrap();
    assert_eq!(last.top, 4_000_000.0);
}

#[test]
fn value_axis_fixed_with_million_labels() {
    let chart = build_chart(&MetricsTable::fixed(), &ReportConfig::default());
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 6_000_000.0));
    let layout = chart.layout(&layout_opts()).expect("layout");
    let labels: Vec<&str> = layout.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["$0.0M", "$1.0M", "$2.0M", "$3.0M", "$4.0M", "$5.0M", "$6.0M"]);
    assert!((layout.y_ticks[0].px - layout.plot.bottom).abs() < 1e-2);
    assert!((layout.y_ticks[6].px - layout.plot.top).abs() < 1e-2);
}

#[test]
fn category_ticks_are_year_labels() {
    let chart = build_chart(&MetricsTable::fixed(), &ReportConfig::default());
    let layout = chart.layout(&layout_opts()).expect("layout");
    let labels: Vec<&str> = layout.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "3", "4", "5"]);
    assert!(layout.x_ticks.windows(2).all(|w| w[0].px < w[1].px));
}

#[test]
fn figure_is_high_resolution() {
    let opts = ReportConfig::default().render_options();
    assert_eq!((opts.width, opts.height), (4200, 3000));
    let pad = opts.tight_pad.expect("tight bbox enabled");
    assert!((pad - 7.2).abs() < 1e-4);
}

#[test]
fn legend_is_one_row_below_axis_and_inside_crop() {
    let chart = build_chart(&MetricsTable::fixed(), &ReportConfig::default());
    let opts = ReportConfig::default().render_options();
    let layout = chart.layout(&opts).expect("layout");
    let labels = chart.label_layout(&TextShaper::new(), &layout, &opts);
    let plot = layout.plot;

    let legend = labels.legend.as_ref().expect("legend");
    assert_eq!(legend.rows, 1);
    let names: Vec<&str> = legend.entries.iter().map(|e| e.text.text.as_str()).collect();
    assert_eq!(names, ["Users", "Revenue", "COGS", "SG&A", "EBITA"]);

    assert!(legend.frame.top >= plot.bottom + 0.05 * plot.height() - 1e-3);
    let x_label = labels.x_label.as_ref().expect("x label");
    assert_eq!(x_label.text, "Year");
    assert!(legend.frame.top >= x_label.rect.bottom);

    let crop = chart.crop_rect(&opts).expect("crop");
    for r in [legend.frame.round_out(), labels.title.as_ref().expect("title").rect.round_out()] {
        assert!(crop.left <= r.left && crop.top <= r.top && crop.right >= r.right && crop.bottom >= r.bottom);
    }
    assert!(crop.bottom <= opts.height, "legend must fit on the surface");
}
