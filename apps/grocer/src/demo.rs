//! # Demo Data
//!
//! The opening inventory and the scripted shopping list used when no
//! snapshot exists yet.
//!
//! ## Opening Inventory
//! ```text
//! ┌────┬─────────────────┬──────────┬──────────┬─────────────────────────┐
//! │ Id │ Name            │ Category │ Price    │ Stock                   │
//! ├────┼─────────────────┼──────────┼──────────┼─────────────────────────┤
//! │ 1  │ Bread           │ Bakery   │ 60.00    │ 10 + 5 (merged to 15)   │
//! │ 2  │ Milk            │ Dairy    │ 100.00   │ 2                       │
//! │ 3  │ Poppy-seed bun  │ Bakery   │ 25.00/kg │ 100 kg                  │
//! └────┴─────────────────┴──────────┴──────────┴─────────────────────────┘
//! ```

use grocer_core::{CoreResult, Customer, Money, Product, Store};
use tracing::{info, warn};

/// Catalog entries as `(name, amount)`: pieces for packaged, kg for bulk.
pub const DEMO_SHOPPING_LIST: &[(&str, f64)] = &[("Bread", 2.0), ("Poppy-seed bun", 1.5)];

/// Stocks `store` with the opening inventory.
pub fn seed_demo_catalog(store: &mut Store) -> CoreResult<()> {
    store.add_product(Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 10))?;
    store.add_product(Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 5))?;
    store.add_product(Product::packaged(2, "Milk", "Dairy", Money::from_cents(10000), 2))?;
    store.add_product(Product::bulk(
        3,
        "Poppy-seed bun",
        "Bakery",
        Money::from_cents(2500),
        100.0,
    ))?;

    info!(
        categories = store.categories().len(),
        products = store.product_count(),
        "Demo catalog seeded"
    );
    Ok(())
}

/// Looks up a catalog entry by name across all categories.
pub fn find_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a Product> {
    store
        .categories()
        .into_iter()
        .flat_map(|category| store.products_in_category(category).iter())
        .find(|product| product.name() == name)
}

/// Puts each list entry the store can cover into `customer`'s cart.
///
/// Entries that are not stocked, or stocked short, are skipped with a
/// warning.
///
/// ## Returns
/// The number of entries added.
pub fn fill_cart(store: &Store, customer: &mut Customer, list: &[(&str, f64)]) -> usize {
    let mut added = 0;

    for &(name, amount) in list {
        let Some(product) = find_by_name(store, name) else {
            warn!(product = name, "Not in the catalog, skipped");
            continue;
        };

        if product.with_amount(amount).measure.amount() > product.measure.amount() {
            warn!(
                product = %product.identity,
                stocked = %product.measure,
                wanted = amount,
                "Not enough in stock, skipped"
            );
            continue;
        }

        if customer.cart_mut().add_item(product, amount) {
            added += 1;
        }
    }

    added
}
