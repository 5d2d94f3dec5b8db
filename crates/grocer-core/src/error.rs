//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Collection invariant violations                │
//! │  └── ValidationError  - Malformed product fields                       │
//! │                                                                         │
//! │  grocer-persist errors (separate crate)                                │
//! │  └── PersistError     - Snapshot I/O, encode, decode failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Insufficient balance, insufficient quantity in the cart, and bad cart
//! amounts are user-input shaped. They are logged and reported through
//! outcome values ([`crate::CartRemoval`], [`crate::CheckoutOutcome`]),
//! leaving state unchanged.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent structural violations of collection invariants. They are
/// fatal to the operation that raised them and propagate to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempt to remove more than a collection holds.
    ///
    /// ## When This Occurs
    /// ```text
    /// Held:      Bread (qty 3)
    /// Remove:    Bread (qty 5)
    ///      │
    ///      ▼
    /// InvalidRemoval { product: "Bread", requested: "5", held: "3" }
    ///      │
    ///      ▼
    /// Collection unchanged, caller decides what to do
    /// ```
    #[error("Cannot remove {requested} of {product}: only {held} held")]
    InvalidRemoval {
        product: String,
        requested: String,
        held: String,
    },

    /// A checkout line refers to a product the store does not stock.
    #[error("Product not found in store: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product fields.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value would not fit once combined.
    #[error("{field} is out of range")]
    Overflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
