//! # Chart Renderer
//!
//! Renders every artifact into one output directory, isolating failures.
//!
//! ## Flow
//! ```text
//! render_all(rows)
//!      │
//!      ├── rows empty? ──► WARN, RenderReport { skipped: true }, no files
//!      │
//!      ▼
//! for kind in ChartKind::ALL
//!      │
//!      ├── create output dir ──► Err → outcome.result = Err(Io)
//!      ├── draw_* (plotters)  ──► Err → outcome.result = Err(Draw)
//!      └── Ok                 ──► INFO "Chart written"
//!      │
//!      ▼
//! RenderReport { outcomes: [4] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use salesplot_core::AggregateRow;
use tracing::{error, info, warn};

use crate::artifact::{ChartKind, ChartOutcome, RenderReport};
use crate::bar::{draw_quantity_bars, draw_revenue_bars};
use crate::combined::draw_revenue_vs_quantity;
use crate::error::{RenderError, RenderResult};
use crate::pie::draw_quantity_pie;

/// Writes the chart files into `output_dir`.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ChartRenderer {
            output_dir: output_dir.into(),
        }
    }

    /// Where `kind` is written.
    pub fn path_for(&self, kind: ChartKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Renders all four charts. Never stops early on a failed artifact.
    pub fn render_all(&self, rows: &[AggregateRow]) -> RenderReport {
        if rows.is_empty() {
            warn!(
                output_dir = %self.output_dir.display(),
                "No aggregate rows; skipping chart rendering"
            );
            return RenderReport::skipped();
        }

        let outcomes = ChartKind::ALL
            .iter()
            .map(|&kind| self.render(kind, rows))
            .collect();

        RenderReport {
            skipped: false,
            outcomes,
        }
    }

    /// Renders a single chart.
    pub fn render(&self, kind: ChartKind, rows: &[AggregateRow]) -> ChartOutcome {
        let path = self.path_for(kind);
        let result = self.try_render(kind, &path, rows);

        match &result {
            Ok(()) => info!(chart = %kind, path = %path.display(), "Chart written"),
            Err(e) => error!(chart = %kind, path = %path.display(), error = %e, "Chart failed"),
        }

        ChartOutcome { kind, path, result }
    }

    fn try_render(&self, kind: ChartKind, path: &Path, rows: &[AggregateRow]) -> RenderResult<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::Io {
            chart: kind,
            source,
        })?;

        let drawn = match kind {
            ChartKind::RevenueBar => draw_revenue_bars(path, rows),
            ChartKind::QuantityBar => draw_quantity_bars(path, rows),
            ChartKind::RevenueVsQuantity => draw_revenue_vs_quantity(path, rows),
            ChartKind::QuantityPie => draw_quantity_pie(path, rows),
        };

        drawn.map_err(|e| RenderError::Draw {
            chart: kind,
            message: e.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<AggregateRow> {
        vec![
            AggregateRow::new("Product A", 7, 140.0),
            AggregateRow::new("Product B", 2, 40.0),
        ]
    }

    #[test]
    fn test_render_all_writes_four_files() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(dir.path());

        let report = renderer.render_all(&rows());

        assert!(!report.skipped);
        assert!(report.is_success());
        assert_eq!(report.written().len(), 4);
        for kind in ChartKind::ALL {
            let svg = std::fs::read_to_string(renderer.path_for(kind)).unwrap();
            assert!(svg.contains("<svg"), "{kind} is not an SVG");
        }
    }

    #[test]
    fn test_empty_rows_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let renderer = ChartRenderer::new(&out);

        let report = renderer.render_all(&[]);

        assert!(report.skipped);
        assert!(report.outcomes.is_empty());
        assert!(report.is_success());
        assert!(!out.exists());
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("charts");

        let report = ChartRenderer::new(&out).render_all(&rows());

        assert!(report.is_success());
        assert!(out.join(ChartKind::QuantityPie.file_name()).exists());
    }

    #[test]
    fn test_one_failure_does_not_block_the_others() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(dir.path());

        // A directory where the revenue chart file should go makes that write fail.
        std::fs::create_dir(renderer.path_for(ChartKind::RevenueBar)).unwrap();

        let report = renderer.render_all(&rows());

        assert!(!report.is_success());
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, ChartKind::RevenueBar);
        assert!(matches!(failures[0].result, Err(RenderError::Draw { .. })));
        assert_eq!(report.written().len(), 3);
    }

    #[test]
    fn test_unwritable_output_dir_fails_every_chart() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let report = ChartRenderer::new(&blocker).render_all(&rows());

        assert_eq!(report.failures().len(), 4);
        assert!(report
            .failures()
            .iter()
            .all(|f| matches!(f.result, Err(RenderError::Io { .. }))));
    }
}
