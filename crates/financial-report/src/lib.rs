// File: crates/financial-report/src/lib.rs
// Summary: Five-year metrics table, summary formatting and chart construction for the report binary.

pub mod config;
pub mod figure;
pub mod metrics;
pub mod summary;

pub use config::ReportConfig;
pub use metrics::{MetricsRow, MetricsTable, YearInput};
