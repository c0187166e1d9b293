//! Summary printed on stdout at the end of a run.

use std::io::Write;

use salesplot_core::summary::format_revenue;
use salesplot_core::SalesSummary;

use crate::config::SummaryFormat;
use crate::error::AppResult;

const RULE_WIDTH: usize = 40;

/// Writes `summary` to `out` in the requested format.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &SalesSummary,
    format: SummaryFormat,
) -> AppResult<()> {
    match format {
        SummaryFormat::Table => write_table(out, summary)?,
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, summary: &SalesSummary) -> std::io::Result<()> {
    writeln!(out, "📊 Sales Summary ({} rows in store)", summary.row_count)?;
    writeln!(out)?;

    if summary.is_empty() {
        writeln!(out, "No sales recorded.")?;
        return Ok(());
    }

    writeln!(out, "{:<16}{:>10}{:>14}", "Product", "Quantity", "Revenue")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in &summary.rows {
        writeln!(
            out,
            "{:<16}{:>10}{:>14}",
            row.product,
            row.total_qty,
            format_revenue(row.revenue)
        )?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<16}{:>10}{:>14}",
        "Total",
        summary.total_qty,
        format_revenue(summary.total_revenue)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesplot_core::AggregateRow;

    fn summary() -> SalesSummary {
        SalesSummary::new(
            vec![
                AggregateRow::new("Product A", 7, 140.0),
                AggregateRow::new("Product B", 2, 30.0),
            ],
            3,
        )
    }

    fn render(summary: &SalesSummary, format: SummaryFormat) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, summary, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_lists_products_and_totals() {
        let text = render(&summary(), SummaryFormat::Table);

        assert!(text.contains("3 rows in store"));
        let product_a = text.lines().find(|l| l.starts_with("Product A")).unwrap();
        assert!(product_a.contains(" 7"));
        assert!(product_a.ends_with("₹140"));

        let total = text.lines().find(|l| l.starts_with("Total")).unwrap();
        assert!(total.contains(" 9"));
        assert!(total.ends_with("₹170"));
    }

    #[test]
    fn test_table_for_empty_store() {
        let text = render(&SalesSummary::new(Vec::new(), 0), SummaryFormat::Table);

        assert!(text.contains("No sales recorded."));
        assert!(!text.contains("Total"));
    }

    #[test]
    fn test_json_round_trips() {
        let expected = summary();
        let text = render(&expected, SummaryFormat::Json);

        let parsed: SalesSummary = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, expected);
    }
}
