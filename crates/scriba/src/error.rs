//! Error types for the gateway layer.

use scriba_store::StorageError;
use thiserror::Error;

/// Errors surfaced by [`Repository`](crate::Repository) and
/// [`SettingsManager`](crate::SettingsManager).
///
/// Storage faults never panic the process; they arrive here as typed
/// values for the caller to surface.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A storage fault passed through from the note table or the
    /// settings store.
    #[error("storage error: {0}")]
    Upstream(#[from] StorageError),

    /// The runtime failed to drive a mutation task to completion.
    #[error("mutation task failed: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// True when the failure is a stale row reference rather than a
    /// storage fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::Upstream(StorageError::NotFound(_)))
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
