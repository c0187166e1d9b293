//! # Sale Repository
//!
//! Append-only access to the `sales` table.
//!
//! ## Write / Read Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Pipeline Run                                  │
//! │                                                                         │
//! │  1. WRITE (one transaction)                                            │
//! │     ├── insert_batch()  → validate + INSERT × N → COMMIT               │
//! │     └── replace_batch() → DELETE + validate + INSERT × N → COMMIT      │
//! │         any failure → transaction dropped → ROLLBACK, nothing visible  │
//! │                                                                         │
//! │  2. READ (whole table, all runs)                                       │
//! │     └── aggregate_by_product() → GROUP BY product ORDER BY product     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are never cleared implicitly: totals accumulate across runs until
//! [`SaleRepository::replace_batch`] swaps the table contents for a new batch.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use salesplot_core::validation::validate_new_sale;
use salesplot_core::{AggregateRow, NewSale, SalesRecord};

/// Sums taken straight from the `sales` rows, bypassing the grouping query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesTotals {
    /// Σ quantity
    pub quantity: i64,
    /// Σ quantity × price
    pub revenue: f64,
}

/// Outcome of a committed batch write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchWrite {
    /// Rows deleted before the insert (0 unless replacing).
    pub cleared: u64,
    pub inserted: u64,
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Appends a batch in a single transaction.
    ///
    /// Each record is validated and inserted inside the transaction. If any
    /// record is invalid or any insert fails, the transaction is dropped
    /// without commit and no row of the batch is visible.
    ///
    /// ## Returns
    /// Number of rows inserted (always `records.len()` on success).
    pub async fn insert_batch(&self, records: &[NewSale]) -> DbResult<u64> {
        let write = self.write_batch(records, false).await?;
        Ok(write.inserted)
    }

    /// Deletes every existing row and inserts `records`, all in one
    /// transaction. On any failure the earlier rows are left untouched.
    ///
    /// Ids are not reused afterwards (AUTOINCREMENT).
    pub async fn replace_batch(&self, records: &[NewSale]) -> DbResult<BatchWrite> {
        self.write_batch(records, true).await
    }

    async fn write_batch(&self, records: &[NewSale], replace: bool) -> DbResult<BatchWrite> {
        debug!(count = records.len(), replace, "Writing sales batch");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let cleared = if replace {
            sqlx::query("DELETE FROM sales")
                .execute(&mut *tx)
                .await?
                .rows_affected()
        } else {
            0
        };

        let mut inserted = 0u64;
        for (index, record) in records.iter().enumerate() {
            validate_new_sale(record).map_err(|e| DbError::invalid_record(index, e))?;

            let result = sqlx::query(
                r#"
                INSERT INTO sales (product, quantity, price)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&record.product)
            .bind(record.quantity)
            .bind(record.price)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        if replace {
            warn!(cleared, "Sales table cleared");
        }
        info!(inserted, "Sales batch committed");
        Ok(BatchWrite { cleared, inserted })
    }

    /// Per-product totals over the whole table, ordered by product name.
    pub async fn aggregate_by_product(&self) -> DbResult<Vec<AggregateRow>> {
        let rows: Vec<AggregateRow> = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT
                product,
                SUM(quantity) AS total_qty,
                SUM(quantity * price) AS revenue
            FROM sales
            GROUP BY product
            ORDER BY product
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(products = rows.len(), "Aggregated sales by product");
        Ok(rows)
    }

    /// Σ quantity and Σ quantity × price over every row.
    pub async fn totals(&self) -> DbResult<SalesTotals> {
        let (quantity, revenue): (i64, f64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(quantity), 0),
                COALESCE(SUM(quantity * price), 0.0)
            FROM sales
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SalesTotals { quantity, revenue })
    }

    /// Counts stored rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns every stored row, oldest first.
    pub async fn list(&self) -> DbResult<Vec<SalesRecord>> {
        let records: Vec<SalesRecord> = sqlx::query_as::<_, SalesRecord>(
            "SELECT id, product, quantity, price FROM sales ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

}

// =============================================================================
// Unit Tests
// =============================================================================
