//! # Grocer Application Library
//!
//! Startup, logging, and the scripted store session.
//!
//! ## Module Organization
//! ```text
//! grocer/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── main.rs         ◄─── Tokio entry point
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Shared store, sort-then-export
//! │   └── config.rs   ◄─── Configuration state
//! ├── demo.rs         ◄─── Opening inventory, shopping list
//! └── error.rs        ◄─── Application error type
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. init_tracing (main)     console + file sinks                        │
//! │           │                                                             │
//! │  2. open catalog            <data_dir>/store.json, or seed demo data    │
//! │           │                                                             │
//! │  3. log catalog             category by category                        │
//! │           │                                                             │
//! │  4. scripted purchase       fill cart ──► checkout ──► receipt          │
//! │           │                                                             │
//! │  5. export categories       sort by name + write, one lock per export   │
//! │           │                                                             │
//! │  6. save snapshots          copy under lock, write off the lock         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod demo;
pub mod error;
pub mod state;

use std::fs;
use std::path::PathBuf;

use grocer_core::{CashRegister, CheckoutOutcome, Customer, Money, Receipt, Store};
use grocer_persist::{load_catalog, SnapshotFormat};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use error::{AppError, AppResult};
pub use state::{CatalogState, ConfigState};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,grocer=debug";

/// What a session did, for the caller to report.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Whether the catalog came from an existing snapshot.
    pub loaded_snapshot: bool,
    pub categories: usize,
    pub products: usize,
    /// Receipt of the scripted purchase, if it went through.
    pub receipt: Option<Receipt>,
    pub revenue: Money,
    /// Every file written: category exports first, then full snapshots.
    pub written: Vec<PathBuf>,
}

/// Installs the global log subscriber.
///
/// ## Sinks
/// - Console: human-readable `fmt` output
/// - File: `<data_dir>/<log_file>` through a non-blocking writer, when
///   `log_file` is set
///
/// The returned guard flushes the file sink when dropped; hold it for the
/// life of the process.
pub fn init_tracing(config: &ConfigState) -> AppResult<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match &config.log_file {
        Some(file_name) => {
            fs::create_dir_all(config.data_dir())
                .map_err(|e| AppError::io(config.data_dir(), e))?;
            let appender = tracing_appender::rolling::never(config.data_dir(), file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}

/// Runs one store session against `config.data_dir`.
///
/// Logging must already be installed (see [`init_tracing`]); without a
/// subscriber the session runs silently.
pub async fn run(config: &ConfigState) -> AppResult<SessionReport> {
    fs::create_dir_all(config.data_dir()).map_err(|e| AppError::io(config.data_dir(), e))?;

    let (store, loaded_snapshot) = open_catalog(config)?;
    let catalog = CatalogState::new(store);
    catalog.with_store(log_catalog).await;

    // Scripted purchase
    let mut register = CashRegister::new();
    let mut customer = Customer::new(
        config.customer_name.clone(),
        Money::from_cents(config.opening_balance_cents),
    );
    catalog
        .with_store(|store| demo::fill_cart(store, &mut customer, demo::DEMO_SHOPPING_LIST))
        .await;

    let receipt = match catalog.checkout(&mut register, &mut customer).await? {
        CheckoutOutcome::Completed(receipt) => {
            let text = receipt.render(&config.store_name, |m| config.format_currency(m));
            info!("Receipt\n{}", text);
            Some(receipt)
        }
        CheckoutOutcome::EmptyCart | CheckoutOutcome::InsufficientFunds { .. } => None,
    };
    info!(
        customer = %customer.name,
        balance = %config.format_currency(customer.balance()),
        "Session balance"
    );

    // Exports, one exclusive region per category
    let mut written = Vec::new();
    let categories = catalog
        .with_store(|store| {
            store
                .categories()
                .into_iter()
                .map(String::from)
                .collect::<Vec<String>>()
        })
        .await;
    for category in categories {
        let path = config.export_path(&category, SnapshotFormat::Json);
        catalog
            .sort_and_export_category(category, path.clone(), SnapshotFormat::Json)
            .await?;
        written.push(path);
    }

    // Full snapshots
    for format in SnapshotFormat::ALL {
        let path = config.snapshot_path(format);
        catalog.save_snapshot(path.clone(), format).await?;
        written.push(path);
    }

    let (categories, products) = catalog
        .with_store(|store| (store.categories().len(), store.product_count()))
        .await;

    Ok(SessionReport {
        loaded_snapshot,
        categories,
        products,
        receipt,
        revenue: register.revenue(),
        written,
    })
}

/// Loads the JSON snapshot if one exists, otherwise seeds demo data.
fn open_catalog(config: &ConfigState) -> AppResult<(Store, bool)> {
    let path = config.snapshot_path(SnapshotFormat::Json);
    if path.exists() {
        let store = load_catalog(&path, SnapshotFormat::Json)?;
        return Ok((store, true));
    }

    info!(path = %path.display(), "No snapshot found, seeding demo catalog");
    let mut store = Store::new();
    demo::seed_demo_catalog(&mut store)?;
    Ok((store, false))
}

fn log_catalog(store: &Store) {
    if store.product_count() == 0 {
        warn!("Catalog is empty");
        return;
    }

    for category in store.categories() {
        info!(category, "Category");
        for product in store.products_in_category(category) {
            info!(category, "  {}", product);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ProductIdentity;

    fn test_config(dir: &std::path::Path) -> ConfigState {
        ConfigState {
            data_dir: dir.to_path_buf(),
            log_file: None,
            ..ConfigState::default()
        }
    }

    fn stock_of(store: &Store, id: i64, name: &str, category: &str) -> f64 {
        store
            .products_in_category(category)
            .get(&ProductIdentity::new(id, name, category))
            .map(|p| p.measure.amount())
            .unwrap_or(0.0)
    }

    #[tokio::test]
    async fn test_first_run_seeds_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let report = run(&config).await.unwrap();

        assert!(!report.loaded_snapshot);
        assert_eq!(report.categories, 2);
        assert_eq!(report.products, 3);
        assert_eq!(report.revenue, Money::from_cents(15_750));
        assert_eq!(report.receipt.as_ref().map(|r| r.lines.len()), Some(2));

        for path in &report.written {
            assert!(path.exists(), "{} missing", path.display());
        }
        assert_eq!(report.written.len(), 4);

        for format in SnapshotFormat::ALL {
            let saved = load_catalog(config.snapshot_path(format), format).unwrap();
            assert_eq!(stock_of(&saved, 1, "Bread", "Bakery"), 13.0);
            assert_eq!(stock_of(&saved, 3, "Poppy-seed bun", "Bakery"), 98.5);
            assert_eq!(stock_of(&saved, 2, "Milk", "Dairy"), 2.0);
        }
    }

    #[tokio::test]
    async fn test_second_run_loads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        run(&config).await.unwrap();
        let report = run(&config).await.unwrap();

        assert!(report.loaded_snapshot);
        let saved = load_catalog(config.snapshot_path(SnapshotFormat::Xml), SnapshotFormat::Xml)
            .unwrap();
        assert_eq!(stock_of(&saved, 1, "Bread", "Bakery"), 11.0);
        assert_eq!(stock_of(&saved, 3, "Poppy-seed bun", "Bakery"), 97.0);
    }

    #[tokio::test]
    async fn test_exports_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        run(&config).await.unwrap();

        let bakery = grocer_persist::load_products(
            config.export_path("Bakery", SnapshotFormat::Json),
            SnapshotFormat::Json,
        )
        .unwrap();
        let names: Vec<&str> = bakery.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bread", "Poppy-seed bun"]);
    }

    #[tokio::test]
    async fn test_poor_customer_buys_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState {
            opening_balance_cents: 100,
            ..test_config(dir.path())
        };

        let report = run(&config).await.unwrap();

        assert!(report.receipt.is_none());
        assert!(report.revenue.is_zero());
        let saved = load_catalog(config.snapshot_path(SnapshotFormat::Json), SnapshotFormat::Json)
            .unwrap();
        assert_eq!(stock_of(&saved, 1, "Bread", "Bakery"), 15.0);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(config.snapshot_path(SnapshotFormat::Json), "{ not a catalog").unwrap();

        let result = run(&config).await;

        assert!(matches!(result, Err(AppError::Persist(_))));
    }
}
