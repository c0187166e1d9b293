//! # salesplot-charts: Chart Rendering
//!
//! Turns the per-product aggregate into four SVG files.
//!
//! ## Artifacts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &[AggregateRow]                                                        │
//! │       │                                                                 │
//! │       ├──► bar::draw_revenue_bars      final_revenue_by_product.svg    │
//! │       ├──► bar::draw_quantity_bars     final_quantity_by_product.svg   │
//! │       ├──► combined::draw_revenue_vs_quantity                          │
//! │       │                                final_revenue_vs_quantity.svg   │
//! │       └──► pie::draw_quantity_pie      final_quantity_pie_chart.svg    │
//! │                                                                         │
//! │  Each artifact is rendered on its own: one failure is recorded in the  │
//! │  report and the rest are still attempted. An empty aggregate renders   │
//! │  nothing and the report is marked skipped.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use salesplot_charts::ChartRenderer;
//! use salesplot_core::AggregateRow;
//!
//! let rows = vec![AggregateRow::new("Product A", 7, 140.0)];
//! let report = ChartRenderer::new("./charts").render_all(&rows);
//! assert!(report.is_success());
//! ```

pub mod artifact;
pub mod bar;
pub mod combined;
pub mod error;
pub mod pie;
pub mod renderer;
mod style;

pub use artifact::{ChartKind, ChartOutcome, RenderReport};
pub use error::{RenderError, RenderResult};
pub use renderer::ChartRenderer;
