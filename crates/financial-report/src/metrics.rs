// File: crates/financial-report/src/metrics.rs
// Summary: Fixed per-year business metrics and the two derived columns.

/// Number of years in the table.
pub const YEARS: usize = 5;

/// Users scaling: the final year's 85,000 users map to 4,000,000 on the dollar axis.
pub const USERS_SCALE_TARGET: f64 = 4_000_000.0;
pub const USERS_SCALE_REFERENCE: f64 = 85_000.0;

/// One year of raw inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearInput {
    pub year: &'static str,
    pub revenue: u64,
    pub cogs: u64,
    pub sgsa: u64,
    pub ebita: u64,
    pub users: u64,
}

pub const INPUT: [YearInput; YEARS] = [
    YearInput { year: "1", revenue: 58_800, cogs: 15_600, sgsa: 11_760, ebita: 31_440, users: 1_000 },
    YearInput { year: "2", revenue: 294_000, cogs: 78_000, sgsa: 56_800, ebita: 157_200, users: 5_000 },
    YearInput { year: "3", revenue: 882_000, cogs: 234_000, sgsa: 176_400, ebita: 471_600, users: 15_000 },
    YearInput { year: "4", revenue: 2_058_000, cogs: 546_000, sgsa: 411_600, ebita: 1_100_400, users: 35_000 },
    YearInput { year: "5", revenue: 4_998_000, cogs: 1_326_000, sgsa: 999_600, ebita: 2_672_400, users: 85_000 },
];

/// Users rescaled onto the dollar axis.
///
/// Multiplies before dividing so the reference count maps exactly onto the target.
pub fn scale_users(users: u64) -> f64 {
    users as f64 * USERS_SCALE_TARGET / USERS_SCALE_REFERENCE
}

/// Inputs plus derived columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricsRow {
    pub input: YearInput,
    pub users_scaled: f64,
    pub cogs_sgsa: u64,
}

impl MetricsRow {
    pub fn derive(input: YearInput) -> Self {
        Self {
            input,
            users_scaled: scale_users(input.users),
            cogs_sgsa: input.cogs + input.sgsa,
        }
    }
}

/// Read-only table, one row per year in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsTable {
    rows: [MetricsRow; YEARS],
}

impl MetricsTable {
    pub fn new(inputs: [YearInput; YEARS]) -> Self {
        Self { rows: inputs.map(MetricsRow::derive) }
    }

    /// The built-in five-year table.
    pub fn fixed() -> Self {
        Self::new(INPUT)
    }

    pub fn rows(&self) -> &[MetricsRow] {
        &self.rows
    }

    pub fn years(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.input.year).collect()
    }

    /// One column as chart values.
    pub fn column(&self, f: impl Fn(&MetricsRow) -> f64) -> Vec<f64> {
        self.rows.iter().map(f).collect()
    }
}
