//! # Application Error Type
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  grocer-core     ── CoreError ────┐                                     │
//! │  grocer-persist  ── PersistError ─┼──► AppError ──► main logs + exits   │
//! │  std / tokio     ── io, join ─────┘                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! User-shaped problems (insufficient funds, short stock in the cart) never
//! reach this type; they are logged where they happen and the operation is
//! skipped.

use std::path::PathBuf;

use grocer_core::CoreError;
use grocer_persist::PersistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A collection invariant was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A snapshot could not be saved or loaded.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// A directory or file outside the snapshot layer failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested category is not stocked.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The log subscriber could not be installed.
    #[error("Failed to install log subscriber: {0}")]
    Logging(String),

    /// A blocking export task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code, used in the exit log line.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::InvalidRemoval { .. }) => "INVALID_REMOVAL",
            AppError::Core(CoreError::ProductNotFound(_)) => "NOT_FOUND",
            AppError::Core(CoreError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Persist(_) => "PERSISTENCE_ERROR",
            AppError::Io { .. } => "IO_ERROR",
            AppError::UnknownCategory(_) => "NOT_FOUND",
            AppError::Logging(_) | AppError::Task(_) => "INTERNAL",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ValidationError;

    #[test]
    fn test_core_errors_pass_through() {
        let err: AppError = CoreError::ProductNotFound("#9 Salt (Pantry)".to_string()).into();
        assert_eq!(err.to_string(), "Product not found in store: #9 Salt (Pantry)");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_codes() {
        let err: AppError = CoreError::Validation(ValidationError::Negative {
            field: "price".to_string(),
        })
        .into();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let err: AppError = PersistError::UnknownVariant("crate".to_string()).into();
        assert_eq!(err.code(), "PERSISTENCE_ERROR");
        assert_eq!(err.to_string(), "Unknown product kind 'crate'");
    }
}
