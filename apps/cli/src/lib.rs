//! # salesplot
//!
//! Generates a batch of synthetic sales, appends it to a SQLite store,
//! aggregates quantity and revenue per product and renders four charts.
//!
//! ## Module Organization
//! ```text
//! salesplot
//! ├── config    - Cli flags/env and the resolved PipelineConfig
//! ├── error     - AppError (exit code 1)
//! ├── pipeline  - open → generate → insert → aggregate → close, charts
//! └── report    - table / JSON summary on stdout
//! ```
//!
//! Logs go to stderr so stdout carries only the summary.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::{Cli, PipelineConfig, SummaryFormat};
pub use error::{AppError, AppResult};

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,salesplot=debug,sqlx=warn";

/// Initializes the tracing subscriber on stderr.
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=salesplot_db=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Runs the whole pipeline: store stages, summary on stdout, charts.
pub async fn run(config: PipelineConfig) -> AppResult<()> {
    run_to(config, &mut std::io::stdout()).await
}

/// Same as [`run`] with the summary written to `out`.
pub async fn run_to<W: Write>(config: PipelineConfig, out: &mut W) -> AppResult<()> {
    config.validate()?;

    info!(
        db = %config.db_path.display(),
        batch_size = config.generator.batch_size,
        seed = ?config.generator.seed,
        reset = config.reset,
        "Starting salesplot run"
    );

    let run = pipeline::collect(&config).await?;
    info!(
        previous_rows = run.previous_rows,
        cleared = run.cleared,
        inserted = run.inserted,
        row_count = run.summary.row_count,
        "Store updated"
    );

    report::write_summary(out, &run.summary, config.format)?;

    if !config.render_charts {
        info!("Chart rendering disabled");
        return Ok(());
    }

    let report = pipeline::render_charts(&config, &run.summary.rows);
    pipeline::check_report(&report)?;

    info!(
        written = report.written().len(),
        output_dir = %config.output_dir.display(),
        "Run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesplot_core::GeneratorConfig;

    fn config(dir: &std::path::Path) -> PipelineConfig {
        let mut config = PipelineConfig::new(dir.join("sales_data.db"), dir.join("charts"));
        config.generator = GeneratorConfig::default().batch_size(10).seed(9);
        config
    }

    #[tokio::test]
    async fn test_run_prints_summary_and_writes_charts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let mut out = Vec::new();

        run_to(config.clone(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("10 rows in store"));
        assert!(config.output_dir.join("final_quantity_pie_chart.svg").exists());
    }

    #[tokio::test]
    async fn test_run_reports_failed_charts_after_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.output_dir = dir.path().join("blocked");
        std::fs::write(&config.output_dir, b"").unwrap();
        let mut out = Vec::new();

        let err = run_to(config, &mut out).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::ChartsFailed {
                failed: 4,
                attempted: 4
            }
        ));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Sales Summary"));
        assert!(text.contains("Total"));
    }

    #[tokio::test]
    async fn test_run_rejects_bad_config_before_opening_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.generator = config.generator.batch_size(0);
        let mut out = Vec::new();

        let err = run_to(config.clone(), &mut out).await.unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert!(out.is_empty());
        assert!(!config.db_path.exists());
    }
}
