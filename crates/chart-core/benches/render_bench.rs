use anyhow::Result;
use chart_core::{Axis, BarSeries, CategoryAxis, Chart, GridLines, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new(CategoryAxis::new("X", (0..n).map(|i| i.to_string())));
    let values = |k: f64| (0..n).map(|i| ((i as f64 * 0.1 + k).sin() + 1.5) * 1e6).collect::<Vec<_>>();
    ch.y_axis = Axis::new("Y", 0.0, 6e6);
    ch.bar_width = 0.2;
    ch.grid = Some(GridLines { alpha: 0.3 });
    let lower = BarSeries::new("lower", values(1.0)).with_offset(0.5);
    let upper = BarSeries::new("upper", values(2.0)).stacked_on(&lower);
    ch.add_series(BarSeries::new("a", values(0.0)).with_offset(-1.5));
    ch.add_series(BarSeries::new("b", values(0.5)).with_offset(-0.5));
    ch.add_series(lower);
    ch.add_series(upper);
    ch.add_series(BarSeries::new("c", values(3.0)).with_offset(1.5));
    ch
}

fn bench_layout(c: &mut Criterion) {
    let ch = build_chart(1_000);
    let opts = RenderOptions::default();
    c.bench_function("layout_1000_categories", |b| {
        b.iter(|| black_box(ch.layout(&opts).map(|l| l.bars.len())))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[5usize, 200usize] {
        group.bench_function(format!("bars_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
