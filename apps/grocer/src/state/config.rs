//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROCER_*`)
//! 2. Defaults (this file)
//!
//! ## Files Under `data_dir`
//! ```text
//! <data_dir>/
//! ├── store.json          full catalog snapshot (read at startup)
//! ├── store.xml           full catalog snapshot
//! ├── log.txt             file log sink (when log_file is set)
//! └── exports/
//!     ├── Bakery.json     one sorted export per category
//!     └── Dairy.json
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use grocer_core::Money;
use grocer_persist::SnapshotFormat;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (printed on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Directory holding snapshots, exports, and the log file
    pub data_dir: PathBuf,

    /// Base file name of the full catalog snapshots
    pub snapshot_name: String,

    /// Log file name inside `data_dir`; `None` disables the file sink
    pub log_file: Option<String>,

    /// Name of the customer for the scripted session
    pub customer_name: String,

    /// Opening balance of that customer, in minor units
    pub opening_balance_cents: i64,
}

impl Default for ConfigState {
    /// Returns defaults suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Grocer Corner Shop"
    /// - Currency: ₽
    /// - Data: the platform data directory
    /// - Log file: `log.txt`
    /// - Customer: "Ivan" with 1000.00
    fn default() -> Self {
        ConfigState {
            store_name: "Grocer Corner Shop".to_string(),
            currency_symbol: "₽".to_string(),
            data_dir: default_data_dir(),
            snapshot_name: "store".to_string(),
            log_file: Some("log.txt".to_string()),
            customer_name: "Ivan".to_string(),
            opening_balance_cents: 100_000,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCER_STORE_NAME`: Override store name
    /// - `GROCER_DATA_DIR`: Override data directory
    /// - `GROCER_CURRENCY_SYMBOL`: Override currency symbol
    /// - `GROCER_CUSTOMER`: Override customer name
    /// - `GROCER_BALANCE`: Override opening balance (e.g., "250.50")
    /// - `GROCER_LOG_FILE`: Override log file name; empty disables the file sink
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("GROCER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(data_dir) = lookup("GROCER_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Some(symbol) = lookup("GROCER_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(customer) = lookup("GROCER_CUSTOMER") {
            config.customer_name = customer;
        }

        if let Some(balance_str) = lookup("GROCER_BALANCE") {
            if let Ok(balance) = balance_str.trim().parse::<f64>() {
                if balance.is_finite() && balance >= 0.0 {
                    config.opening_balance_cents = (balance * 100.0).round() as i64;
                }
            }
        }

        if let Some(log_file) = lookup("GROCER_LOG_FILE") {
            config.log_file = if log_file.trim().is_empty() {
                None
            } else {
                Some(log_file)
            };
        }

        config
    }

    /// Path of the full catalog snapshot in `format`.
    pub fn snapshot_path(&self, format: SnapshotFormat) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.snapshot_name, format.extension()))
    }

    /// Directory holding per-category exports.
    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }

    /// Path of one category's sorted export.
    ///
    /// Characters that are not alphanumeric become `_`.
    pub fn export_path(&self, category: &str, format: SnapshotFormat) -> PathBuf {
        let stem: String = category
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        self.export_dir()
            .join(format!("{}.{}", stem, format.extension()))
    }

    /// Full path of the log file, if the file sink is enabled.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(|file| self.data_dir.join(file))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Formats an amount with the currency symbol, two minor digits.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(6000)), "₽60.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().unsigned_abs(),
            amount.cents_part()
        )
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "grocer", "grocer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
