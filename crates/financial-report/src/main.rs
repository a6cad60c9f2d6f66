// File: crates/financial-report/src/main.rs
// Summary: Renders the five-year metrics chart to ../img/financial_graph.png and prints a data summary.

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use std::io::Write;

use financial_report::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use financial_report::{figure, summary, MetricsTable, ReportConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .init();

    let cfg = ReportConfig::default();
    let table = MetricsTable::fixed();
    info!("derived Users_scaled and COGS_SGSA for {} years", table.rows().len());

    let chart = figure::build_chart(&table, &cfg);
    let opts = cfg.render_options();
    chart
        .render_to_png(&opts, &cfg.output_path)
        .with_context(|| format!("failed to save chart to '{}'", cfg.output_path.display()))?;
    info!(
        "wrote {} ({}x{} px surface at {} dpi, tight bbox)",
        cfg.output_path.display(),
        opts.width,
        opts.height,
        cfg.dpi
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    summary::write_summary(&mut out, &table).context("failed to print summary")?;
    out.flush()?;
    Ok(())
}
