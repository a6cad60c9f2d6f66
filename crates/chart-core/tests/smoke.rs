// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, BarSeries, CategoryAxis, Chart, GridLines, Legend, RenderError, RenderOptions, TickFormat};

fn sample_chart() -> Chart {
    let mut chart = Chart::new(CategoryAxis::new("X", ["a", "b", "c", "d"]));
    chart.title = Some("Smoke".to_string());
    chart.y_axis = Axis::new("Y", 0.0, 4_000_000.0).with_format(TickFormat::UsdMillions { decimals: 1 });
    chart.bar_width = 0.3;
    chart.grid = Some(GridLines { alpha: 0.3 });
    chart.legend = Some(Legend { columns: 2, offset_frac: 0.05 });
    let base = BarSeries::new("Base", vec![1e6, 2e6, 1.5e6, 3e6]).with_offset(-0.5);
    let top = BarSeries::new("Top", vec![5e5, 2.5e5, 1e6, 5e5]).stacked_on(&base);
    chart.add_series(base);
    chart.add_series(top);
    chart.add_series(BarSeries::new("Side", vec![2e6, 1e6, 3e6, 2e6]).with_offset(0.5));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn missing_parent_directory_is_an_error() {
    let chart = sample_chart();
    let out = std::path::PathBuf::from("target/test_out/does/not/exist/chart.png");
    match chart.render_to_png(&RenderOptions::default(), &out) {
        Err(RenderError::Io { path, .. }) => assert_eq!(path, out),
        other => panic!("expected Io error, got {:?}", other.err()),
    }
}
