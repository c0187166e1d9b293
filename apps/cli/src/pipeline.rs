//! # Pipeline
//!
//! One run, in order:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌────────┐
//! │  open    │──►│ generate │──►│  insert  │──►│ aggregate │──►│ close  │
//! │  store   │   │  batch   │   │ (1 txn)  │   │ + count   │   │ store  │
//! └──────────┘   └──────────┘   └──────────┘   └───────────┘   └────────┘
//!                                                                   │
//!                                       summary ◄───────────────────┘
//!                                          │
//!                                          ▼
//!                                   render charts (per-artifact isolation)
//! ```
//!
//! The store is closed on every path once it was opened. Rows from earlier
//! runs stay in the table unless `reset` is set, so the summary covers all
//! runs so far. With `reset` the old rows are deleted in the same transaction
//! as the insert.

use salesplot_charts::{ChartRenderer, RenderReport};
use salesplot_core::{AggregateRow, SalesGenerator, SalesSummary};
use salesplot_db::{Database, DbConfig, DbResult};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::{AppError, AppResult};

/// What the store stages of a run produced.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Rows present before this run inserted anything.
    pub previous_rows: i64,
    /// Rows removed by `reset`.
    pub cleared: u64,
    pub inserted: u64,
    pub summary: SalesSummary,
}

/// Opens the store, runs generate → insert → aggregate and closes it again.
pub async fn collect(config: &PipelineConfig) -> AppResult<PipelineRun> {
    let db = Database::new(DbConfig::new(&config.db_path)).await?;

    let result = run_stages(&db, config).await;
    db.close().await;

    Ok(result?)
}

async fn run_stages(db: &Database, config: &PipelineConfig) -> DbResult<PipelineRun> {
    let sales = db.sales();

    let previous_rows = sales.count().await?;
    if !config.reset && previous_rows > 0 {
        warn!(
            previous_rows,
            "Store already holds sales from earlier runs; totals will include them (use --reset to start over)"
        );
    }

    let mut generator = SalesGenerator::new(config.generator);
    let batch = generator.generate();

    // Reset and insert commit together so a failed run leaves the store as it was.
    let (cleared, inserted) = if config.reset {
        let write = sales.replace_batch(&batch).await?;
        (write.cleared, write.inserted)
    } else {
        (0, sales.insert_batch(&batch).await?)
    };

    let rows = sales.aggregate_by_product().await?;
    let row_count = sales.count().await?;

    info!(
        inserted,
        row_count,
        products = rows.len(),
        "Sales aggregated"
    );

    Ok(PipelineRun {
        previous_rows,
        cleared,
        inserted,
        summary: SalesSummary::new(rows, row_count),
    })
}

/// Renders every chart for `rows` into the configured output directory.
pub fn render_charts(config: &PipelineConfig, rows: &[AggregateRow]) -> RenderReport {
    ChartRenderer::new(&config.output_dir).render_all(rows)
}

/// Turns a report with failed artifacts into [`AppError::ChartsFailed`].
pub fn check_report(report: &RenderReport) -> AppResult<()> {
    let failed = report.failures().len();
    if failed == 0 {
        return Ok(());
    }

    Err(AppError::ChartsFailed {
        failed,
        attempted: report.outcomes.len(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
