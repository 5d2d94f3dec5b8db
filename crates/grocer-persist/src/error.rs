//! # Persistence Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / serde_json / quick-xml / ValidationError              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistError (this module) ← adds path / format context                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the app)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence failures are never swallowed: every save/load path returns
//! one of these.

use std::path::PathBuf;

use grocer_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing a snapshot file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record list could not be encoded.
    #[error("Failed to encode {format} snapshot: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// The snapshot text could not be decoded.
    #[error("Failed to decode {format} snapshot: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// A record carries a kind tag this version does not know.
    #[error("Unknown product kind '{0}'")]
    UnknownVariant(String),

    /// A record is missing its measure for its kind.
    #[error("Product {id} of kind '{kind}' has no {field}")]
    MissingMeasure {
        id: i64,
        kind: &'static str,
        field: &'static str,
    },

    /// A record decoded but failed product validation.
    #[error("Invalid product record: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// The store refused a decoded product.
    #[error("Catalog rejected record: {0}")]
    Rejected(#[from] CoreError),

    /// The file extension does not name a known format.
    #[error("Cannot infer snapshot format from {0}")]
    UnknownFormat(PathBuf),
}

impl PersistError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
