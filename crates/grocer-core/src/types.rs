//! # Domain Types
//!
//! Product identity, measures, and products.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐   ┌──────────────────┐   ┌──────────────────┐   │
//! │  │  ProductIdentity  │   │     Measure      │   │   ProductKind    │   │
//! │  │  ───────────────  │   │  ──────────────  │   │  ──────────────  │   │
//! │  │  id (i64)         │   │  Packaged {qty}  │   │  Packaged        │   │
//! │  │  name             │   │  Bulk {weight}   │   │  Bulk            │   │
//! │  │  category         │   └──────────────────┘   └──────────────────┘   │
//! │  └───────────────────┘                                                  │
//! │            │                      │                                     │
//! │            └──────────┬───────────┘                                     │
//! │                       ▼                                                 │
//! │             ┌──────────────────┐                                        │
//! │             │     Product      │  identity + price + measure            │
//! │             └──────────────────┘                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity vs. Lot
//! Two products are the *same item* when their identity triples are equal.
//! Price is not part of identity. Merging additionally requires the same
//! [`ProductKind`]: a packaged and a bulk product never combine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product Identity
// =============================================================================

/// The (id, name, category) triple that keys every collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductIdentity {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl ProductIdentity {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        ProductIdentity {
            id,
            name: name.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for ProductIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.name, self.category)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Which measure a product is sold by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Discrete units, priced per unit.
    Packaged,
    /// Continuous weight, priced per unit of weight.
    Bulk,
}

impl ProductKind {
    /// Tag used in snapshot files.
    pub const fn tag(&self) -> &'static str {
        match self {
            ProductKind::Packaged => "packaged",
            ProductKind::Bulk => "bulk",
        }
    }

    /// Parses a snapshot tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "packaged" => Some(ProductKind::Packaged),
            "bulk" => Some(ProductKind::Bulk),
            _ => None,
        }
    }
}

// =============================================================================
// Measure
// =============================================================================

/// The measured, mutable part of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Packaged { quantity: i64 },
    Bulk { weight: f64 },
}

impl Measure {
    #[inline]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Measure::Packaged { .. } => ProductKind::Packaged,
            Measure::Bulk { .. } => ProductKind::Bulk,
        }
    }

    /// Quantity for packaged measures.
    #[inline]
    pub const fn as_quantity(&self) -> Option<i64> {
        match self {
            Measure::Packaged { quantity } => Some(*quantity),
            Measure::Bulk { .. } => None,
        }
    }

    /// Weight for bulk measures.
    #[inline]
    pub const fn as_weight(&self) -> Option<f64> {
        match self {
            Measure::Packaged { .. } => None,
            Measure::Bulk { weight } => Some(*weight),
        }
    }

    /// The measured amount as a float, whatever the variant.
    #[inline]
    pub fn amount(&self) -> f64 {
        match self {
            Measure::Packaged { quantity } => *quantity as f64,
            Measure::Bulk { weight } => *weight,
        }
    }

    /// Exactly zero. Bulk weights are not compared with a tolerance.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Measure::Packaged { quantity } => *quantity == 0,
            Measure::Bulk { weight } => *weight == 0.0,
        }
    }

    /// Name of the measured field, for error messages.
    pub const fn field(&self) -> &'static str {
        match self {
            Measure::Packaged { .. } => "quantity",
            Measure::Bulk { .. } => "weight",
        }
    }

    /// Sum of two measures of the same kind.
    ///
    /// `None` if the kinds differ, the quantity overflows, or the weight is
    /// no longer finite.
    pub fn checked_add(self, other: Measure) -> Option<Measure> {
        match (self, other) {
            (Measure::Packaged { quantity }, Measure::Packaged { quantity: more }) => quantity
                .checked_add(more)
                .map(|quantity| Measure::Packaged { quantity }),
            (Measure::Bulk { weight }, Measure::Bulk { weight: more }) => Some(weight + more)
                .filter(|w| w.is_finite())
                .map(|weight| Measure::Bulk { weight }),
            _ => None,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Packaged { quantity } => write!(f, "{} pcs", quantity),
            Measure::Bulk { weight } => write!(f, "{} kg", weight),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog or in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub identity: ProductIdentity,

    /// Price per unit (packaged) or per unit of weight (bulk).
    pub price: Money,

    pub measure: Measure,
}

impl Product {
    /// Creates a packaged product.
    pub fn packaged(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        Product {
            identity: ProductIdentity::new(id, name, category),
            price,
            measure: Measure::Packaged { quantity },
        }
    }

    /// Creates a bulk product.
    pub fn bulk(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        weight: f64,
    ) -> Self {
        Product {
            identity: ProductIdentity::new(id, name, category),
            price,
            measure: Measure::Bulk { weight },
        }
    }

    /// Copies identity, price, and variant with a new measured amount.
    ///
    /// Packaged amounts are truncated toward zero.
    pub fn with_amount(&self, amount: f64) -> Self {
        let measure = match self.measure {
            Measure::Packaged { .. } => Measure::Packaged {
                quantity: amount as i64,
            },
            Measure::Bulk { .. } => Measure::Bulk { weight: amount },
        };
        Product {
            identity: self.identity.clone(),
            price: self.price,
            measure,
        }
    }

    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.measure.kind()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.identity.category
    }

    /// Same identity and same variant: the two can merge.
    pub fn same_lot(&self, other: &Product) -> bool {
        self.identity == other.identity && self.kind() == other.kind()
    }

    /// Line price: quantity × price, or weight × price.
    pub fn calculate_price(&self) -> Money {
        match self.measure {
            Measure::Packaged { quantity } => self.price.multiply_quantity(quantity),
            Measure::Bulk { weight } => self.price.multiply_weight(weight),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.measure {
            Measure::Packaged { quantity } => write!(
                f,
                "{} - {}/pc (qty: {})",
                self.identity.name, self.price, quantity
            ),
            Measure::Bulk { weight } => write!(
                f,
                "{} - {}/kg (weight: {} kg)",
                self.identity.name, self.price, weight
            ),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
