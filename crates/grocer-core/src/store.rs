//! # Store
//!
//! The catalog: one [`ProductCollection`] per category.
//!
//! ## Ownership
//! There is no global store. The application entry point constructs one
//! `Store` and hands out references; checkout takes `&mut Store`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store                                                                  │
//! │  ├── "Bakery" ──► [Bread ×15, Poppy-seed bun 100 kg]                    │
//! │  └── "Dairy"  ──► [Milk ×2]                                             │
//! │                                                                         │
//! │  Categories keep first-insertion order; products keep theirs.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::collection::ProductCollection;
use crate::error::CoreResult;
use crate::types::Product;
use crate::validation::validate_product;

static EMPTY: ProductCollection = ProductCollection::new();

#[derive(Debug, Clone, PartialEq)]
struct Category {
    name: String,
    products: ProductCollection,
}

/// Category-indexed catalog of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    categories: Vec<Category>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Mutable access to one category's collection.
    pub fn category_mut(&mut self, name: &str) -> Option<&mut ProductCollection> {
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.products)
    }

    /// Validates `product`, creates its category if needed, and merges it in.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        validate_product(&product)?;

        let idx = match self
            .categories
            .iter()
            .position(|c| c.name == product.identity.category)
        {
            Some(idx) => idx,
            None => {
                debug!(category = %product.identity.category, "Category created");
                self.categories.push(Category {
                    name: product.identity.category.clone(),
                    products: ProductCollection::new(),
                });
                self.categories.len() - 1
            }
        };

        self.categories[idx].products.add(product)
    }

    /// Removes `product`'s measure from its category.
    ///
    /// ## Returns
    /// - `Ok(false)` if the category or product is unknown
    /// - `Ok(true)` if a matching entry was found
    /// - `Err(CoreError::InvalidRemoval)` if more is requested than stocked
    /// - `Err(CoreError::Validation)` if the amount is negative or not finite
    pub fn remove_product(&mut self, product: &Product) -> CoreResult<bool> {
        match self.category_mut(&product.identity.category) {
            Some(products) => products.remove(product),
            None => Ok(false),
        }
    }

    /// Category names in the order they were first stocked.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// The live collection for `category`, or an empty one if unknown.
    pub fn products_in_category(&self, category: &str) -> &ProductCollection {
        self.category(category)
            .map(|c| &c.products)
            .unwrap_or(&EMPTY)
    }

    /// Every product, category by category, in one fresh collection.
    ///
    /// Category is part of identity, so entries from different categories
    /// never collide.
    pub fn all_products(&self) -> ProductCollection {
        ProductCollection::from_distinct(
            self.categories
                .iter()
                .flat_map(|c| c.products.iter().cloned())
                .collect(),
        )
    }

    /// Number of entries across all categories.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
