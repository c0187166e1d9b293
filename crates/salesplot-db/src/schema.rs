//! # Schema Setup
//!
//! The store has a single table. There is no migration history: the table
//! is created if absent and otherwise left untouched.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sales                                                                  │
//! │  ───────────────────────────────────────────────                        │
//! │  id        INTEGER PRIMARY KEY AUTOINCREMENT   (never reused)          │
//! │  product   TEXT                                                         │
//! │  quantity  INTEGER                                                      │
//! │  price     REAL                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Name of the sales table.
pub const SALES_TABLE: &str = "sales";

const CREATE_SALES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product TEXT,
        quantity INTEGER,
        price REAL
    )
"#;

/// Creates the sales table if it does not exist.
///
/// Idempotent: safe to call on every run.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!(table = SALES_TABLE, "Ensuring schema");

    sqlx::query(CREATE_SALES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Returns how many tables named `name` exist (0 or 1).
///
/// ## Usage
/// For diagnostics and tests.
pub async fn table_count(pool: &SqlitePool, name: &str) -> DbResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(name)
            .fetch_one(pool)
            .await?;

    Ok(count)
}
