//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)     ValidationError (salesplot-core)       │
//! │       │                               │                                 │
//! │       ▼                               ▼                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (cli) → stderr, exit code 1                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use salesplot_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Opening the store failed.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File is not a SQLite database
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Creating the sales table failed.
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction could not begin or commit.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// A record in the batch failed validation; the batch was rolled back.
    #[error("Invalid record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Connection pool exhausted or closed.
    #[error("Connection pool unavailable: {0}")]
    PoolUnavailable(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates an InvalidRecord error for the record at `index`.
    pub fn invalid_record(index: usize, source: ValidationError) -> Self {
        DbError::InvalidRecord { index, source }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolUnavailable
/// sqlx::Error::PoolClosed     → DbError::PoolUnavailable
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolUnavailable("timed out".to_string()),

            sqlx::Error::PoolClosed => DbError::PoolUnavailable("pool is closed".to_string()),

            sqlx::Error::Io(io_err) => DbError::ConnectionFailed(io_err.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_closed_maps_to_unavailable() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::PoolUnavailable(_)));
    }

    #[test]
    fn test_invalid_record_message() {
        let err = DbError::invalid_record(
            3,
            ValidationError::Required {
                field: "product".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Invalid record at position 3: product is required"
        );
    }
}
