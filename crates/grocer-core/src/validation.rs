//! # Validation Module
//!
//! Field rules a product must satisfy before it enters the store.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store::add_product ──► validate_product ──► ProductCollection::add     │
//! │                                                                         │
//! │  Snapshot decode ──► ProductRecord → Product ──► validate_product       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart amounts are not validated here: a bad cart amount is user input and
//! is logged and skipped by the cart itself.

use crate::error::ValidationError;
use crate::types::{Measure, Product};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Bread").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name)
}

/// Validates a category name.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_label("category", category)
}

fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a measure: quantity ≥ 0, weight finite and ≥ 0.
pub fn validate_measure(measure: &Measure) -> ValidationResult<()> {
    match *measure {
        Measure::Packaged { quantity } if quantity < 0 => Err(ValidationError::Negative {
            field: "quantity".to_string(),
        }),
        Measure::Bulk { weight } if !weight.is_finite() => Err(ValidationError::NotFinite {
            field: "weight".to_string(),
        }),
        Measure::Bulk { weight } if weight < 0.0 => Err(ValidationError::Negative {
            field: "weight".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.identity.id < 0 {
        return Err(ValidationError::Negative {
            field: "id".to_string(),
        });
    }
    validate_product_name(&product.identity.name)?;
    validate_category(&product.identity.category)?;

    if product.price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    validate_measure(&product.measure)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Milk").is_ok());
        assert_eq!(
            validate_product_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert_eq!(
            validate_product_name(&"x".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LEN
            })
        );
    }

    #[test]
    fn test_validate_category_counts_chars_not_bytes() {
        // Cyrillic letters are two bytes each in UTF-8.
        assert!(validate_category(&"б".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_measure() {
        assert!(validate_measure(&Measure::Packaged { quantity: 0 }).is_ok());
        assert!(validate_measure(&Measure::Packaged { quantity: -1 }).is_err());
        assert!(validate_measure(&Measure::Bulk { weight: 0.0 }).is_ok());
        assert!(validate_measure(&Measure::Bulk { weight: -0.5 }).is_err());
        assert_eq!(
            validate_measure(&Measure::Bulk { weight: f64::NAN }),
            Err(ValidationError::NotFinite {
                field: "weight".to_string()
            })
        );
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 10);
        assert!(validate_product(&ok).is_ok());

        let free = Product::packaged(1, "Sample", "Bakery", Money::zero(), 1);
        assert!(validate_product(&free).is_ok());

        let negative_price = Product::packaged(1, "Bread", "Bakery", Money::from_cents(-1), 1);
        assert!(validate_product(&negative_price).is_err());

        let no_category = Product::bulk(3, "Bun", " ", Money::from_cents(2500), 1.0);
        assert!(validate_product(&no_category).is_err());
    }
}
