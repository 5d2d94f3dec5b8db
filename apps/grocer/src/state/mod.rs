//! # State Module
//!
//! Application state, one focused type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐             │
//! │  │    CatalogState      │          │    ConfigState       │             │
//! │  │                      │          │                      │             │
//! │  │  Arc<tokio::Mutex<   │          │  store_name          │             │
//! │  │    Store             │          │  currency            │             │
//! │  │  >>                  │          │  data_dir, log_file  │             │
//! │  └──────────────────────┘          └──────────────────────┘             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CatalogState: every access goes through the async mutex              │
//! │  • ConfigState: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::CatalogState;
pub use config::ConfigState;
