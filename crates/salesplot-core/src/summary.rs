//! # Summary Math
//!
//! Grand totals over the aggregate rows and each product's share of the
//! total quantity (the numbers behind the pie chart).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AggregateRow;
use crate::CURRENCY_SYMBOL;

// =============================================================================
// Sales Summary
// =============================================================================

/// Aggregate rows plus grand totals, as printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub generated_at: DateTime<Utc>,

    /// Rows in the sales table when the summary was taken.
    pub row_count: i64,

    pub rows: Vec<AggregateRow>,
    pub total_qty: i64,
    pub total_revenue: f64,
}

impl SalesSummary {
    pub fn new(rows: Vec<AggregateRow>, row_count: i64) -> Self {
        let total_qty = rows.iter().map(|r| r.total_qty).sum();
        let total_revenue = rows.iter().map(|r| r.revenue).sum();

        SalesSummary {
            generated_at: Utc::now(),
            row_count,
            rows,
            total_qty,
            total_revenue,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Quantity Shares
// =============================================================================

/// One product's share of the total quantity sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityShare {
    pub product: String,

    /// Percentage of total quantity, rounded to one decimal place.
    pub percent: f64,
}

impl QuantityShare {
    /// Pie label text, e.g. `77.8%`.
    pub fn label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// Computes each row's share of the total quantity.
///
/// Returns an empty vector when the rows are empty or sum to zero.
///
/// ## Example
/// ```rust
/// use salesplot_core::{quantity_shares, AggregateRow};
///
/// let rows = vec![
///     AggregateRow::new("A", 7, 140.0),
///     AggregateRow::new("B", 2, 40.0),
/// ];
/// let shares = quantity_shares(&rows);
///
/// assert_eq!(shares[0].label(), "77.8%");
/// assert_eq!(shares[1].label(), "22.2%");
/// ```
pub fn quantity_shares(rows: &[AggregateRow]) -> Vec<QuantityShare> {
    let total: i64 = rows.iter().map(|r| r.total_qty).sum();
    if total <= 0 {
        return Vec::new();
    }

    rows.iter()
        .map(|row| QuantityShare {
            product: row.product.clone(),
            percent: round_one_decimal(row.total_qty as f64 * 100.0 / total as f64),
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a revenue amount the way chart labels show it, e.g. `₹140`.
pub fn format_revenue(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value:.0}")
}

// =============================================================================
// Unit Tests
// =============================================================================
