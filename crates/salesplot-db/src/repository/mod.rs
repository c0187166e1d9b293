//! # Repository Module
//!
//! SQL lives here and nowhere else.
//!
//! ```text
//! Pipeline
//!      │  db.sales().insert_batch(&batch)
//!      │  db.sales().aggregate_by_product()
//!      ▼
//! SaleRepository
//! ├── insert_batch(&self, records)
//! ├── replace_batch(&self, records)
//! ├── aggregate_by_product(&self)
//! └── totals(&self) / count(&self) / list(&self)
//!      │
//!      ▼
//! SQLite (sales table)
//! ```
//!
//! ## Available Repositories
//!
//! - [`sale::SaleRepository`] - Sales inserts, aggregation and reset

pub mod sale;
