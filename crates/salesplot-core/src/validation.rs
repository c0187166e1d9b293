//! # Validation Module
//!
//! Field checks applied to every record before it is written.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Generator                                                    │
//! │  └── Only draws from PRODUCTS / 1..=10 / PRICE_POINTS                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: insert_batch (salesplot-db)                                  │
//! │  └── THIS MODULE, inside the write transaction                         │
//! │      A failure rolls back the whole batch                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  └── Column affinity only                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::NewSale;
use crate::{MAX_QUANTITY, MIN_QUANTITY, PRICE_POINTS, PRODUCTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name against the closed vocabulary.
///
/// ## Example
/// ```rust
/// use salesplot_core::validation::validate_product;
///
/// assert!(validate_product("Product C").is_ok());
/// assert!(validate_product("Product Z").is_err());
/// assert!(validate_product("  ").is_err());
/// ```
pub fn validate_product(product: &str) -> ValidationResult<()> {
    if product.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    if !PRODUCTS.contains(&product) {
        return Err(ValidationError::NotAllowed {
            field: "product".to_string(),
            value: product.to_string(),
            allowed: PRODUCTS.iter().map(|p| p.to_string()).collect(),
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be between MIN_QUANTITY (1) and MAX_QUANTITY (10), inclusive
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
            value: quantity,
        });
    }

    Ok(())
}

/// Validates a unit price against the configured price points.
///
/// Price points are whole numbers, so exact comparison is safe.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !PRICE_POINTS.contains(&price) {
        return Err(ValidationError::NotAllowed {
            field: "price".to_string(),
            value: price.to_string(),
            allowed: PRICE_POINTS.iter().map(|p| format!("{p:.1}")).collect(),
        });
    }

    Ok(())
}

/// Validates every field of a record.
pub fn validate_new_sale(sale: &NewSale) -> ValidationResult<()> {
    validate_product(&sale.product)?;
    validate_quantity(sale.quantity)?;
    validate_price(sale.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product() {
        for product in PRODUCTS {
            assert!(validate_product(product).is_ok());
        }

        assert!(validate_product("").is_err());
        assert!(validate_product("product a").is_err());
        assert!(matches!(
            validate_product("Widget"),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(11).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(15.0).is_ok());
        assert!(validate_price(35.0).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(22.5).is_err());
    }

    #[test]
    fn test_validate_new_sale_reports_first_bad_field() {
        let sale = NewSale::new("Product A", 0, 1.0);
        let err = validate_new_sale(&sale).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "quantity"));
    }
}
