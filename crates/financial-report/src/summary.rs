// File: crates/financial-report/src/summary.rs
// Summary: Console summary of the metrics table with thousands-separated numbers.

use std::io::{self, Write};

use crate::metrics::MetricsTable;

pub const HEADER: &str = "Data Summary:";
pub const RULE_WIDTH: usize = 50;

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `58800` -> `"$58,800"`.
pub fn usd(n: u64) -> String {
    format!("${}", group_thousands(n))
}

pub fn write_summary<W: Write>(out: &mut W, table: &MetricsTable) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for row in table.rows() {
        let r = &row.input;
        writeln!(out)?;
        writeln!(out, "{}:", r.year)?;
        writeln!(out, "  Users: {}", group_thousands(r.users))?;
        writeln!(out, "  Revenue: {}", usd(r.revenue))?;
        writeln!(out, "  COGS: {}", usd(r.cogs))?;
        writeln!(out, "  SG&A: {}", usd(r.sgsa))?;
        writeln!(out, "  COGS + SG&A: {}", usd(row.cogs_sgsa))?;
        writeln!(out, "  EBITA: {}", usd(r.ebita))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_summary(table: &MetricsTable) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, table).expect("writing to Vec cannot fail");
        String::from_utf8(buf).expect("utf-8 summary")
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(85_000), "85,000");
        assert_eq!(group_thousands(2_672_400), "2,672,400");
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(usd(58_800), "$58,800");
        assert_eq!(usd(4_998_000), "$4,998,000");
    }

    #[test]
    fn first_block_matches() {
        let text = render_summary(&MetricsTable::fixed());
        let want = "Data Summary:\n\
                    ==================================================\n\
                    \n\
                    1:\n  Users: 1,000\n  Revenue: $58,800\n  COGS: $15,600\n  SG&A: $11,760\n  COGS + SG&A: $27,360\n  EBITA: $31,440\n";
        assert!(text.starts_with(want), "got:\n{text}");
    }
}
