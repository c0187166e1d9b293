//! # Render Error Types

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::artifact::ChartKind;

/// Chart rendering errors. Each one belongs to a single artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output directory could not be created.
    #[error("Cannot prepare output directory for {chart}: {source}")]
    Io {
        chart: ChartKind,
        #[source]
        source: std::io::Error,
    },

    /// plotters failed to draw or write the file.
    #[error("Failed to draw {chart}: {message}")]
    Draw { chart: ChartKind, message: String },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result of the plotters calls inside one chart function.
pub(crate) type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;
