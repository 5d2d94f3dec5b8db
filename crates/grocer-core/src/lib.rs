//! # grocer-core: Pure Business Logic for Grocer
//!
//! This crate is the **heart** of Grocer. It owns the product aggregation
//! and inventory-collection engine and everything built on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Grocer Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/grocer (shell)                          │   │
//! │  │    config, log sinks, shared catalog, sort-then-export          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ collection │  │   store   │  │   cart    │  │ register  │  │   │
//! │  │   │ merge/split│  │ categories│  │ add/remove│  │ checkout  │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                grocer-persist (Snapshot Layer)                  │   │
//! │  │               JSON / XML encode, decode, save, load             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product identity, measures, products
//! - [`money`] - Money type with integer arithmetic
//! - [`collection`] - The merge-on-add, split-on-remove container
//! - [`store`] - Category-indexed catalog
//! - [`cart`] - Shopping cart policy on top of the collection
//! - [`customer`] - Balance and cart ownership
//! - [`register`] - Checkout orchestration
//! - [`receipt`] - Receipt value and text rendering
//! - [`validation`] - Product field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::{Money, Product, Store};
//!
//! let mut store = Store::new();
//! let price = Money::from_cents(6000);
//! store.add_product(Product::packaged(1, "Bread", "Bakery", price, 10)).unwrap();
//! store.add_product(Product::packaged(1, "Bread", "Bakery", price, 5)).unwrap();
//!
//! let bakery = store.products_in_category("Bakery");
//! assert_eq!(bakery.len(), 1);
//! assert_eq!(bakery.iter().next().unwrap().measure.as_quantity(), Some(15));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod collection;
pub mod customer;
pub mod error;
pub mod money;
pub mod receipt;
pub mod register;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartRemoval, ShoppingCart};
pub use collection::ProductCollection;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use register::{CashRegister, CheckoutOutcome};
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name or category name.
pub const MAX_NAME_LEN: usize = 200;
