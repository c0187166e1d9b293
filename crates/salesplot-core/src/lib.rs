//! # salesplot-core: Pure Logic for the Sales Pipeline
//!
//! Types and calculations shared by every stage of the pipeline. Nothing in
//! this crate touches the database, the file system or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        salesplot Pipeline                               │
//! │                                                                         │
//! │   generate ──────► persist ──────► aggregate ──────► render            │
//! │      │                │                │                │               │
//! │      ▼                ▼                ▼                ▼               │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌──────────────┐      │
//! │  │ generator  │  │salesplot-db│  │salesplot-db│  │salesplot-    │      │
//! │  │ (here)     │  │insert_batch│  │GROUP BY    │  │charts        │      │
//! │  └────────────┘  └────────────┘  └────────────┘  └──────────────┘      │
//! │                                                                         │
//! │   types • validation • summary   ◄── used by all stages (this crate)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `NewSale`, `SalesRecord`, `AggregateRow`
//! - [`generator`] - seeded synthetic batch generation
//! - [`validation`] - field checks applied before insert
//! - [`summary`] - grand totals and quantity shares
//! - [`error`] - validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use salesplot_core::generator::{GeneratorConfig, SalesGenerator};
//! use salesplot_core::validation::validate_new_sale;
//!
//! let mut generator = SalesGenerator::new(GeneratorConfig::default().seed(7));
//! let batch = generator.generate();
//!
//! assert_eq!(batch.len(), 50);
//! assert!(batch.iter().all(|sale| validate_new_sale(sale).is_ok()));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod generator;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use generator::{GeneratorConfig, SalesGenerator};
pub use summary::{quantity_shares, QuantityShare, SalesSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The closed product vocabulary.
pub const PRODUCTS: [&str; 5] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
];

/// The closed set of unit prices.
pub const PRICE_POINTS: [f64; 5] = [15.0, 20.0, 25.0, 30.0, 35.0];

/// Smallest quantity a generated sale can carry.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity a generated sale can carry.
pub const MAX_QUANTITY: i64 = 10;

/// Records generated per run when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Currency symbol used on chart labels and in the console summary.
pub const CURRENCY_SYMBOL: &str = "₹";
