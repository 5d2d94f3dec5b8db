//! # grocer-persist: Snapshot Layer for Grocer
//!
//! Saves and loads the catalog as snapshot files in two interchangeable
//! encodings.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Store ──all_products()──► ProductRecord[] ──► JSON  (catalog.json)    │
//! │                                      │                                  │
//! │                                      └────────► XML   (catalog.xml)     │
//! │                                                                         │
//! │   file ──decode──► ProductRecord[] ──TryFrom──► Product ──► Store       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`record`] - The on-disk shape of one product
//! - [`codec`] - JSON and XML encodings of a record list
//! - [`snapshot`] - Save/load of collections and whole catalogs
//! - [`error`] - Persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use grocer_persist::{load_catalog, save_catalog, SnapshotFormat};
//!
//! save_catalog(&store, "catalog.xml", SnapshotFormat::Xml)?;
//! let restored = load_catalog("catalog.xml", SnapshotFormat::Xml)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod record;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use codec::SnapshotFormat;
pub use error::{PersistError, PersistResult};
pub use record::ProductRecord;
pub use snapshot::{
    decode_products, encode_products, load_catalog, load_products, save_catalog, save_products,
};
