//! # salesplot-db: Database Layer
//!
//! SQLite storage for generated sales, accessed through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        salesplot Data Flow                              │
//! │                                                                         │
//! │  Pipeline (apps/cli)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   salesplot-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │   Schema     │  │   │
//! │  │   │   (pool.rs)   │    │   (sale.rs)   │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ insert_batch  │    │ CREATE TABLE │  │   │
//! │  │   │ 1 connection  │    │ aggregate     │    │ IF NOT EXISTS│  │   │
//! │  │   │ scoped        │    │ replace/count │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sales_data.db   table sales(id, product, quantity, price)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Store configuration and the [`Database`] handle
//! - [`schema`] - Idempotent table creation
//! - [`repository`] - Sales inserts and the aggregation query
//! - [`error`] - Database error types
//!
//! ## Usage
//! ```rust,ignore
//! use salesplot_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./sales_data.db")).await?;
//! db.sales().insert_batch(&batch).await?;
//! let rows = db.sales().aggregate_by_product().await?;
//! db.close().await;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::sale::{BatchWrite, SaleRepository, SalesTotals};
