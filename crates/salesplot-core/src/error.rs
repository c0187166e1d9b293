//! # Error Types
//!
//! Validation errors for sales records.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salesplot-core     ValidationError  - record field failures (here)    │
//! │  salesplot-db       DbError          - store failures                  │
//! │  salesplot-charts   RenderError      - chart/file failures             │
//! │  salesplot (cli)    AppError         - what the user sees              │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → AppError → stderr + exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Raised when a record does not belong to the closed vocabulary the
/// generator draws from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Value is not in the allowed set.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product".to_string(),
        };
        assert_eq!(err.to_string(), "product is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 10,
            value: 11,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 10, got 11");
    }
}
