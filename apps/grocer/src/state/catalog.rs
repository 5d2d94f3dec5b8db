//! # Catalog State
//!
//! The one [`Store`] of the running application, shared behind an async
//! mutex.
//!
//! ## Sort-Then-Export
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sort_and_export_category("Bakery")                                     │
//! │                                                                         │
//! │  lock_owned().await ──► OwnedMutexGuard<Store>                          │
//! │        │                      │ moved into                              │
//! │        │                      ▼                                         │
//! │        │              spawn_blocking {                                  │
//! │        │                  sort Bakery by name                           │
//! │        │                  encode + write export file                    │
//! │        │              } ──► guard dropped, lock released                │
//! │        │                                                                │
//! │  Any other with_store / with_store_mut waits for the whole region.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Full Snapshots
//! ```text
//! save_snapshot:  lock ──► copy all products ──► unlock ──► spawn_blocking(write)
//! ```
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use grocer_core::{CashRegister, CheckoutOutcome, Customer, Store};
use grocer_persist::{save_products, SnapshotFormat};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Shared catalog handle. Clones point at the same store.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    store: Arc<Mutex<Store>>,
}

impl CatalogState {
    pub fn new(store: Store) -> Self {
        CatalogState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with read access to the store.
    pub async fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().await;
        f(&store)
    }

    /// Runs `f` with write access to the store.
    pub async fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().await;
        f(&mut store)
    }

    /// Checks out `customer` against the shared store.
    pub async fn checkout(
        &self,
        register: &mut CashRegister,
        customer: &mut Customer,
    ) -> AppResult<CheckoutOutcome> {
        let outcome = self
            .with_store_mut(|store| register.process_payment(store, customer))
            .await?;
        Ok(outcome)
    }

    /// Sorts one category by name and writes it to `path`, as one exclusive
    /// region.
    ///
    /// The store stays locked from the sort until the file is written, so no
    /// other mutation can interleave.
    ///
    /// ## Returns
    /// The number of products exported.
    pub async fn sort_and_export_category(
        &self,
        category: String,
        path: PathBuf,
        format: SnapshotFormat,
    ) -> AppResult<usize> {
        let mut store = Arc::clone(&self.store).lock_owned().await;

        let exported = tokio::task::spawn_blocking(move || -> AppResult<usize> {
            let products = store
                .category_mut(&category)
                .ok_or_else(|| AppError::UnknownCategory(category.clone()))?;
            products.sort_by_name();
            debug!(category = %category, products = products.len(), "Category sorted");

            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|e| AppError::io(dir, e))?;
            }
            save_products(products, &path, format)?;

            info!(category = %category, path = %path.display(), "Category exported");
            Ok(products.len())
        })
        .await??;

        Ok(exported)
    }

    /// Writes every product to `path` without holding the lock during I/O.
    ///
    /// ## Returns
    /// The number of products saved.
    pub async fn save_snapshot(&self, path: PathBuf, format: SnapshotFormat) -> AppResult<usize> {
        let products = self.with_store(Store::all_products).await;
        let count = products.len();

        tokio::task::spawn_blocking(move || save_products(&products, &path, format)).await??;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
