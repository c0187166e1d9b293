//! # Chart Artifacts
//!
//! The fixed set of charts, their file names, and the per-run report.

use std::fmt;
use std::path::PathBuf;

use crate::error::RenderResult;

/// The four charts produced on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Bars keyed to revenue.
    RevenueBar,
    /// Bars keyed to total quantity.
    QuantityBar,
    /// Revenue bars with a quantity line on a secondary axis.
    RevenueVsQuantity,
    /// Quantity share per product.
    QuantityPie,
}

impl ChartKind {
    /// Rendering order.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::RevenueBar,
        ChartKind::QuantityBar,
        ChartKind::RevenueVsQuantity,
        ChartKind::QuantityPie,
    ];

    /// Fixed output file name; overwritten on each run.
    pub const fn file_name(self) -> &'static str {
        match self {
            ChartKind::RevenueBar => "final_revenue_by_product.svg",
            ChartKind::QuantityBar => "final_quantity_by_product.svg",
            ChartKind::RevenueVsQuantity => "final_revenue_vs_quantity.svg",
            ChartKind::QuantityPie => "final_quantity_pie_chart.svg",
        }
    }

    /// Chart caption.
    pub const fn title(self) -> &'static str {
        match self {
            ChartKind::RevenueBar => "Total Revenue by Product",
            ChartKind::QuantityBar => "Total Quantity Sold by Product",
            ChartKind::RevenueVsQuantity => "Revenue vs Quantity by Product",
            ChartKind::QuantityPie => "Share of Quantity Sold by Product",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::RevenueBar => "revenue bar chart",
            ChartKind::QuantityBar => "quantity bar chart",
            ChartKind::RevenueVsQuantity => "revenue vs quantity chart",
            ChartKind::QuantityPie => "quantity pie chart",
        };
        f.write_str(name)
    }
}

/// What happened to one artifact.
#[derive(Debug)]
pub struct ChartOutcome {
    pub kind: ChartKind,
    pub path: PathBuf,
    pub result: RenderResult<()>,
}

impl ChartOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of one `render_all` call.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// True when the aggregate was empty and nothing was attempted.
    pub skipped: bool,
    pub outcomes: Vec<ChartOutcome>,
}

impl RenderReport {
    pub(crate) fn skipped() -> Self {
        RenderReport {
            skipped: true,
            outcomes: Vec::new(),
        }
    }

    /// Paths of the files actually written.
    pub fn written(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter(|o| o.is_ok())
            .map(|o| &o.path)
            .collect()
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> Vec<&ChartOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok()).collect()
    }

    /// True when nothing failed (a skipped report counts as success).
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ChartOutcome::is_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_distinct_svgs() {
        let names: HashSet<&str> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), 4);
        assert!(names.iter().all(|n| n.ends_with(".svg")));
    }

    #[test]
    fn test_skipped_report_is_success() {
        let report = RenderReport::skipped();
        assert!(report.skipped);
        assert!(report.is_success());
        assert!(report.written().is_empty());
    }
}
