//! # Product Collection
//!
//! The merge-on-add, split-on-remove container shared by every catalog
//! category and by the shopping cart.
//!
//! ## Add / Remove Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(item)                                                              │
//! │    identity match? ──no──► append (insertion order kept)               │
//! │         │ yes                                                           │
//! │         ├── same kind ──► held += item.measure (overflow: Err)          │
//! │         └── other kind ─► ignored (no merge, no insert)                 │
//! │                                                                         │
//! │  remove(item)                                                           │
//! │    identity match? ──no──► Ok(false)                                    │
//! │         │ yes                                                           │
//! │         ├── non-finite / negative amount ──► Err(Validation)            │
//! │         ├── other kind ──────────► Ok(true), nothing changes            │
//! │         ├── requested > held ────► Err(InvalidRemoval), unchanged       │
//! │         └── held -= requested ───► held == 0 ? evict : keep; Ok(true)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! At most one entry per identity. Lookups are by identity only, so a
//! cross-kind add can never create a second entry that shadows the first.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Measure, Product, ProductIdentity};

/// Insertion-ordered products with at most one entry per identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCollection {
    entries: Vec<Product>,
}

impl ProductCollection {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        ProductCollection {
            entries: Vec::new(),
        }
    }

    /// Builds a collection by adding each product in turn, so duplicate lots
    /// merge.
    pub fn try_from_products<I>(products: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut collection = ProductCollection::new();
        for product in products {
            collection.add(product)?;
        }
        Ok(collection)
    }

    /// Wraps entries already known to hold one entry per identity.
    pub(crate) fn from_distinct(entries: Vec<Product>) -> Self {
        ProductCollection { entries }
    }

    fn position(&self, identity: &ProductIdentity) -> Option<usize> {
        self.entries.iter().position(|p| &p.identity == identity)
    }

    /// Adds `item`, merging its measure into an existing entry of the same
    /// identity and kind.
    ///
    /// ## Errors
    /// `ValidationError::Overflow` if the merged quantity or weight would no
    /// longer fit; the collection is left unchanged.
    pub fn add(&mut self, item: Product) -> CoreResult<()> {
        let Some(idx) = self.position(&item.identity) else {
            debug!(product = %item.identity, measure = %item.measure, "Collection entry added");
            self.entries.push(item);
            return Ok(());
        };

        let existing = &mut self.entries[idx];
        if !existing.same_lot(&item) {
            debug!(
                product = %item.identity,
                held = ?existing.kind(),
                offered = ?item.kind(),
                "Kind mismatch, add ignored"
            );
            return Ok(());
        }

        existing.measure = existing
            .measure
            .checked_add(item.measure)
            .ok_or_else(|| ValidationError::Overflow {
                field: item.measure.field().to_string(),
            })?;
        debug!(product = %existing.identity, measure = %existing.measure, "Collection entry merged");
        Ok(())
    }

    /// Removes `item`'s measure from the matching entry.
    ///
    /// ## Returns
    /// - `Ok(false)` if no entry has `item`'s identity
    /// - `Ok(true)` if an entry matched (including the kind-mismatch no-op)
    /// - `Err(CoreError::Validation)` if the amount is negative or not finite
    /// - `Err(CoreError::InvalidRemoval)` if more is requested than held
    ///
    /// On error the collection is left unchanged.
    pub fn remove(&mut self, item: &Product) -> CoreResult<bool> {
        let Some(idx) = self.position(&item.identity) else {
            return Ok(false);
        };

        let requested = item.measure.amount();
        if !requested.is_finite() {
            return Err(ValidationError::NotFinite {
                field: item.measure.field().to_string(),
            }
            .into());
        }
        if requested < 0.0 {
            return Err(ValidationError::Negative {
                field: "amount".to_string(),
            }
            .into());
        }

        let existing = &mut self.entries[idx];
        match (&mut existing.measure, item.measure) {
            (Measure::Packaged { quantity }, Measure::Packaged { quantity: less }) => {
                if less > *quantity {
                    return Err(invalid_removal(&item.identity, &item.measure, *quantity));
                }
                *quantity -= less;
            }
            (Measure::Bulk { weight }, Measure::Bulk { weight: less }) => {
                if less > *weight {
                    return Err(invalid_removal(&item.identity, &item.measure, *weight));
                }
                *weight -= less;
            }
            _ => {
                debug!(product = %item.identity, "Kind mismatch, remove ignored");
                return Ok(true);
            }
        }

        if existing.measure.is_zero() {
            let evicted = self.entries.remove(idx);
            debug!(product = %evicted.identity, "Collection entry evicted");
        }
        Ok(true)
    }

    /// Identity-only containment. The variant is not considered.
    pub fn contains(&self, identity: &ProductIdentity) -> bool {
        self.position(identity).is_some()
    }

    /// The entry with this identity, if any.
    pub fn get(&self, identity: &ProductIdentity) -> Option<&Product> {
        self.entries.iter().find(|p| &p.identity == identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order (or the last sort order).
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.entries.iter()
    }

    /// Reorders entries in place. Stable; never adds or drops entries.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Product, &Product) -> Ordering,
    {
        self.entries.sort_by(compare);
    }

    /// Sorts by product name, then id.
    pub fn sort_by_name(&mut self) {
        self.sort_by(|a, b| {
            a.identity
                .name
                .cmp(&b.identity.name)
                .then(a.identity.id.cmp(&b.identity.id))
        });
    }
}

fn invalid_removal<T: std::fmt::Display>(
    identity: &ProductIdentity,
    requested: &Measure,
    held: T,
) -> CoreError {
    CoreError::InvalidRemoval {
        product: identity.name.clone(),
        requested: requested.amount().to_string(),
        held: held.to_string(),
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ProductCollection {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn bread(qty: i64) -> Product {
        Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), qty)
    }

    fn buns(weight: f64) -> Product {
        Product::bulk(3, "Poppy-seed bun", "Bakery", Money::from_cents(2500), weight)
    }

    #[test]
    fn test_add_same_identity_merges_quantity() {
        let mut c = ProductCollection::new();
        c.add(bread(10)).unwrap();
        c.add(bread(5)).unwrap();

        assert_eq!(c.len(), 1);
        assert_eq!(c.get(&bread(0).identity).unwrap().measure.as_quantity(), Some(15));
    }

    #[test]
    fn test_add_merges_bulk_weight() {
        let mut c = ProductCollection::new();
        c.add(buns(1.5)).unwrap();
        c.add(buns(2.0)).unwrap();

        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().unwrap().measure.as_weight(), Some(3.5));
    }

    #[test]
    fn test_add_different_price_still_merges_and_keeps_first_price() {
        let mut c = ProductCollection::new();
        c.add(bread(1)).unwrap();
        c.add(Product::packaged(1, "Bread", "Bakery", Money::from_cents(9900), 2)).unwrap();

        assert_eq!(c.len(), 1);
        let entry = c.iter().next().unwrap();
        assert_eq!(entry.price.cents(), 6000);
        assert_eq!(entry.measure.as_quantity(), Some(3));
    }

    #[test]
    fn test_add_cross_kind_is_ignored() {
        let mut c = ProductCollection::new();
        c.add(bread(10)).unwrap();
        c.add(Product::bulk(1, "Bread", "Bakery", Money::from_cents(6000), 2.0)).unwrap();

        assert_eq!(c.len(), 1);
        let entry = c.get(&bread(0).identity).unwrap();
        assert_eq!(entry.measure, Measure::Packaged { quantity: 10 });
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut c = ProductCollection::new();
        c.add(buns(1.0)).unwrap();
        c.add(bread(1)).unwrap();
        c.add(Product::packaged(2, "Milk", "Dairy", Money::from_cents(10000), 2)).unwrap();
        c.add(buns(1.0)).unwrap();

        let names: Vec<&str> = c.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Poppy-seed bun", "Bread", "Milk"]);
    }

    #[test]
    fn test_remove_partial_leaves_remainder() {
        let mut c = ProductCollection::new();
        c.add(bread(10)).unwrap();

        assert!(c.remove(&bread(4)).unwrap());
        assert_eq!(c.iter().next().unwrap().measure.as_quantity(), Some(6));
    }

    #[test]
    fn test_remove_exact_evicts_entry() {
        let mut c = ProductCollection::new();
        c.add(bread(10)).unwrap();
        c.add(buns(2.5)).unwrap();

        assert!(c.remove(&bread(10)).unwrap());
        assert!(c.remove(&buns(2.5)).unwrap());
        assert!(c.is_empty());
    }

    #[test]
    fn test_remove_more_than_held_fails_and_leaves_collection() {
        let mut c = ProductCollection::new();
        c.add(bread(3)).unwrap();
        c.add(buns(1.0)).unwrap();
        let before = c.clone();

        let err = c.remove(&bread(5)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRemoval { .. }));
        assert_eq!(err.to_string(), "Cannot remove 5 of Bread: only 3 held");

        assert!(matches!(
            c.remove(&buns(1.5)),
            Err(CoreError::InvalidRemoval { .. })
        ));
        assert_eq!(c, before);
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut c = ProductCollection::new();
        c.add(bread(1)).unwrap();

        assert!(!c.remove(&buns(1.0)).unwrap());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_remove_cross_kind_is_noop_but_found() {
        let mut c = ProductCollection::new();
        c.add(bread(10)).unwrap();

        let bulk_bread = Product::bulk(1, "Bread", "Bakery", Money::from_cents(6000), 50.0);
        assert!(c.remove(&bulk_bread).unwrap());
        assert_eq!(c.iter().next().unwrap().measure.as_quantity(), Some(10));
    }

    #[test]
    fn test_remove_negative_amount_rejected() {
        let mut c = ProductCollection::new();
        c.add(bread(2)).unwrap();

        assert!(matches!(c.remove(&bread(-1)), Err(CoreError::Validation(_))));
        assert_eq!(c.iter().next().unwrap().measure.as_quantity(), Some(2));
    }

    #[test]
    fn test_remove_non_finite_weight_rejected() {
        let mut c = ProductCollection::new();
        c.add(buns(100.0)).unwrap();

        for bad in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                c.remove(&buns(bad)),
                Err(CoreError::Validation(ValidationError::NotFinite { .. }))
            ));
        }
        assert_eq!(c.iter().next().unwrap().measure.as_weight(), Some(100.0));
    }

    #[test]
    fn test_add_overflow_leaves_entry_unchanged() {
        let mut c = ProductCollection::new();
        c.add(bread(i64::MAX)).unwrap();

        assert!(matches!(
            c.add(bread(1)),
            Err(CoreError::Validation(ValidationError::Overflow { .. }))
        ));
        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().unwrap().measure.as_quantity(), Some(i64::MAX));

        c.add(buns(f64::MAX)).unwrap();
        assert!(c.add(buns(f64::MAX)).is_err());
        assert_eq!(c.get(&buns(0.0).identity).unwrap().measure.as_weight(), Some(f64::MAX));
    }

    #[test]
    fn test_contains_is_variant_blind() {
        let mut c = ProductCollection::new();
        c.add(bread(1)).unwrap();

        let bulk_bread = Product::bulk(1, "Bread", "Bakery", Money::zero(), 1.0);
        assert!(c.contains(&bulk_bread.identity));
        assert!(!c.contains(&buns(1.0).identity));
    }

    #[test]
    fn test_sort_by_name_reorders_only() {
        let mut c = ProductCollection::try_from_products(vec![
            Product::packaged(2, "Milk", "Dairy", Money::from_cents(10000), 2),
            buns(1.0),
            bread(3),
        ])
        .unwrap();

        c.sort_by_name();

        let names: Vec<&str> = c.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bread", "Milk", "Poppy-seed bun"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_try_from_products_merges() {
        let c = ProductCollection::try_from_products(vec![bread(1), bread(2)]).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.iter().next().unwrap().measure.as_quantity(), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut c = ProductCollection::new();
        c.add(bread(1)).unwrap();
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
    }
}
