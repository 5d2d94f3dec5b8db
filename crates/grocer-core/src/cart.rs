//! # Shopping Cart
//!
//! A [`ProductCollection`] plus the cart's own add/remove policy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog item ──► add_item(item, amount) ──► new Product, same          │
//! │                                              identity/price/kind,       │
//! │                                              measure = amount           │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                         ProductCollection::add          │
//! │                                                                         │
//! │  Cart item ──► remove_item(item, amount)                                │
//! │                   held ≥ amount ? decrement (evict at zero)             │
//! │                                 : warn "insufficient in cart"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike [`ProductCollection::remove`], the cart never surfaces an error:
//! it checks the amount first and reports the outcome instead.

use tracing::{debug, info, warn};

use crate::collection::ProductCollection;
use crate::money::Money;
use crate::types::{Measure, Product, ProductIdentity};

/// What `remove_item` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRemoval {
    /// The amount was taken off; some remains.
    Decremented,
    /// The amount was taken off and nothing remains; the line is gone.
    Evicted,
    /// The cart holds less than requested (or the amount was invalid).
    /// Nothing changed.
    Insufficient,
    /// No line of that product and kind is in the cart.
    NotInCart,
}

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: ProductCollection,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Adds `amount` of a catalog item to the cart.
    ///
    /// The catalog item is only read. Packaged amounts are truncated to a
    /// whole number. A non-finite amount, or one that is not positive after
    /// truncation, is rejected with a warning.
    ///
    /// ## Returns
    /// `true` if the cart took the item.
    pub fn add_item(&mut self, catalog_item: &Product, amount: f64) -> bool {
        if !amount.is_finite() {
            warn!(product = %catalog_item.identity, amount, "Cart amount is not a number, item not added");
            return false;
        }

        let item = catalog_item.with_amount(amount);
        if item.measure.amount() <= 0.0 {
            warn!(product = %catalog_item.identity, amount, "Cart amount must be positive, item not added");
            return false;
        }

        let identity = item.identity.clone();
        let measure = item.measure;
        if let Err(err) = self.items.add(item) {
            warn!(product = %identity, error = %err, "Cart cannot hold that much, item not added");
            return false;
        }

        info!(product = %identity, measure = %measure, "Item added to cart");
        true
    }

    /// Takes `amount` of `cart_item` back out of the cart.
    ///
    /// Packaged amounts are truncated to a whole number, as in `add_item`.
    pub fn remove_item(&mut self, cart_item: &Product, amount: f64) -> CartRemoval {
        let Some(held) = self
            .items
            .get(&cart_item.identity)
            .filter(|held| held.kind() == cart_item.kind())
        else {
            warn!(product = %cart_item.identity, "No such item in cart");
            return CartRemoval::NotInCart;
        };

        let request = held.with_amount(amount);
        let requested = request.measure.amount();
        if !requested.is_finite() || requested <= 0.0 || requested > held.measure.amount() {
            warn!(
                product = %cart_item.identity,
                held = %held.measure,
                requested = amount,
                "Cannot remove more than the cart holds"
            );
            return CartRemoval::Insufficient;
        }

        let identity = request.identity.clone();
        // The pre-check above guarantees the collection will not refuse.
        if let Err(err) = self.items.remove(&request) {
            warn!(product = %identity, error = %err, "Cart removal refused");
            return CartRemoval::Insufficient;
        }

        if self.items.contains(&identity) {
            info!(product = %identity, removed = %request.measure, "Cart item decremented");
            CartRemoval::Decremented
        } else {
            info!(product = %identity, "Item removed from cart");
            CartRemoval::Evicted
        }
    }

    /// Takes one unit (or one unit of weight) out of the cart.
    pub fn remove_one(&mut self, cart_item: &Product) -> CartRemoval {
        self.remove_item(cart_item, 1.0)
    }

    pub fn items(&self) -> &ProductCollection {
        &self.items
    }

    /// The line for `identity`, if present.
    pub fn get(&self, identity: &ProductIdentity) -> Option<&Product> {
        self.items.get(identity)
    }

    /// Σ quantity × price over packaged lines + Σ weight × price over bulk lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(Product::calculate_price).sum()
    }

    /// Total packaged units in the cart, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .filter_map(|p| match p.measure {
                Measure::Packaged { quantity } => Some(quantity),
                Measure::Bulk { .. } => None,
            })
            .fold(0_i64, i64::saturating_add)
    }

    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "Cart cleared");
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
