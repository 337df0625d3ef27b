//! Error types for the store layer.

use scriba_core::NoteId;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium rejected the operation (disk error,
    /// corruption, locked database).
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The referenced row does not exist, e.g. a stale id held across a
    /// concurrent deletion.
    #[error("note not found: {0}")]
    NotFound(NoteId),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::WriteFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;
