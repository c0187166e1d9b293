//! # Application Errors
//!
//! What the user sees when a run fails. Every variant ends the process with
//! exit code 1.
//!
//! ```text
//! bad settings ──────────► AppError::Config       (store never opened)
//! store open / schema ─┐
//! insert (rolled back) ├──► AppError::Db          (no charts attempted)
//! aggregate query ─────┘
//! chart artifacts ─────────► AppError::ChartsFailed (after all four tried)
//! stdout / JSON ───────────► AppError::Output / AppError::Json
//! ```

use salesplot_db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("{failed} of {attempted} charts failed to render")]
    ChartsFailed { failed: usize, attempted: usize },

    #[error("Failed to write summary: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
