//! # Domain Types
//!
//! The three shapes a sale takes as it moves through the pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewSale      │   │   SalesRecord   │   │  AggregateRow   │       │
//! │  │  ─────────────  │──►│  ─────────────  │──►│  ─────────────  │       │
//! │  │  product        │   │  id (i64)       │   │  product        │       │
//! │  │  quantity       │   │  product        │   │  total_qty      │       │
//! │  │  price          │   │  quantity       │   │  revenue        │       │
//! │  └─────────────────┘   │  price          │   └─────────────────┘       │
//! │    generated           └─────────────────┘     derived per run         │
//! │                          persisted                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// New Sale
// =============================================================================

/// A sale that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    /// Product name from [`crate::PRODUCTS`].
    pub product: String,

    /// Units sold, 1 through 10.
    pub quantity: i64,

    /// Unit price from [`crate::PRICE_POINTS`].
    pub price: f64,
}

impl NewSale {
    pub fn new(product: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewSale {
            product: product.into(),
            quantity,
            price,
        }
    }

    /// Returns quantity × price.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

// =============================================================================
// Sales Record
// =============================================================================

/// A stored sale. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesRecord {
    /// Assigned by the store (AUTOINCREMENT), never reused.
    pub id: i64,
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

impl SalesRecord {
    /// Returns quantity × price.
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

// =============================================================================
// Aggregate Row
// =============================================================================

/// Per-product totals over the whole sales table.
///
/// Derived on every run and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct AggregateRow {
    pub product: String,

    /// Sum of `quantity` for this product.
    pub total_qty: i64,

    /// Sum of `quantity * price` for this product.
    pub revenue: f64,
}

impl AggregateRow {
    pub fn new(product: impl Into<String>, total_qty: i64, revenue: f64) -> Self {
        AggregateRow {
            product: product.into(),
            total_qty,
            revenue,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
