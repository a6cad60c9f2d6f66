// File: crates/chart-core/src/axis.rs
// Summary: Axis models (value and category) with labels, ranges and tick formatting.

use crate::grid::nice_ticks;

/// How tick values on a value axis are turned into labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Shortest decimal rendering of the value.
    Plain,
    /// Millions of US dollars, e.g. `$4.0M`.
    UsdMillions { decimals: usize },
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Plain => format!("{}", v),
            TickFormat::UsdMillions { decimals } => usd_millions(v, decimals),
        }
    }
}

/// Format `v` as millions of US dollars with `decimals` fraction digits.
pub fn usd_millions(v: f64, decimals: usize) -> String {
    format!("${:.*}M", decimals, v / 1_000_000.0)
}

/// Continuous value axis.
#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
    /// Upper bound on the number of tick intervals.
    pub max_intervals: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Plain, max_intervals: 9 }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    /// Tick values inside `[min, max]`.
    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, self.max_intervals)
    }

    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.ticks().into_iter().map(|t| (t, self.format.format(t))).collect()
    }
}

/// Discrete axis: one slot per category, centered on integer positions.
#[derive(Clone)]
pub struct CategoryAxis {
    pub label: String,
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(label: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { label: label.into(), categories: categories.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_millions_one_decimal() {
        assert_eq!(usd_millions(4_000_000.0, 1), "$4.0M");
        assert_eq!(usd_millions(0.0, 1), "$0.0M");
        assert_eq!(usd_millions(2_500_000.0, 1), "$2.5M");
    }

    #[test]
    fn tick_labels_follow_format() {
        let axis = Axis::new("US $", 0.0, 6_000_000.0)
            .with_format(TickFormat::UsdMillions { decimals: 1 });
        let labels: Vec<String> = axis.tick_labels().into_iter().map(|(_, s)| s).collect();
        assert_eq!(labels, ["$0.0M", "$1.0M", "$2.0M", "$3.0M", "$4.0M", "$5.0M", "$6.0M"]);
    }
}
