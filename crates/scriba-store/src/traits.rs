//! Store traits: the abstract interfaces for note and settings
//! persistence.
//!
//! These traits keep the repository storage-agnostic. Implementations
//! include SQLite (primary) and in-memory (for tests).

use std::sync::Arc;

use async_trait::async_trait;
use scriba_core::{NoteDraft, NoteId, NoteRecord, SettingKey, SettingValue, Settings};

use crate::error::Result;

/// The note table: async interface for durable note rows.
///
/// All methods are async so the SQLite backend can run its blocking work
/// off the runtime via `spawn_blocking`.
///
/// # Design Notes
///
/// - **Identity**: `insert` assigns ids; they increase monotonically and
///   are never reused after deletion.
/// - **Whole rows**: `update` replaces the full row or fails with
///   `NotFound`; there are no partial writes.
/// - **Deterministic scans**: `scan_all` orders by id ascending.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a new note, returning its store-assigned id.
    async fn insert(&self, draft: &NoteDraft) -> Result<NoteId>;

    /// Replace the row identified by `note.id`.
    ///
    /// Fails with [`StorageError::NotFound`](crate::StorageError::NotFound)
    /// when the id is absent, e.g. the row was deleted between the
    /// caller's read and this write.
    async fn update(&self, note: &NoteRecord) -> Result<()>;

    /// Delete one row. Returns the removed count (0 or 1).
    async fn delete(&self, id: NoteId) -> Result<u64>;

    /// Delete every row. Returns the removed count.
    async fn clear(&self) -> Result<u64>;

    /// All notes, ordered by id ascending.
    async fn scan_all(&self) -> Result<Vec<NoteRecord>>;

    /// Get one note by id.
    async fn get(&self, id: NoteId) -> Result<Option<NoteRecord>>;

    /// Number of stored notes.
    async fn count(&self) -> Result<u64>;
}

/// The settings map: async interface for durable preference entries.
///
/// Every key has a documented default; a key that was never written
/// reads as its default. Writes replace the whole entry atomically.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read one setting, substituting the key's default when absent.
    async fn get_setting(&self, key: SettingKey) -> Result<SettingValue>;

    /// Write one setting.
    async fn set_setting(&self, key: SettingKey, value: SettingValue) -> Result<()>;

    /// Read the full bundle, defaults substituted per key.
    async fn load_settings(&self) -> Result<Settings>;

    /// Remove every stored entry, restoring all defaults.
    async fn reset_settings(&self) -> Result<()>;
}

// Shared handles delegate, so one store instance can sit behind both the
// repository and the settings manager.

#[async_trait]
impl<S: NoteStore + ?Sized> NoteStore for Arc<S> {
    async fn insert(&self, draft: &NoteDraft) -> Result<NoteId> {
        (**self).insert(draft).await
    }

    async fn update(&self, note: &NoteRecord) -> Result<()> {
        (**self).update(note).await
    }

    async fn delete(&self, id: NoteId) -> Result<u64> {
        (**self).delete(id).await
    }

    async fn clear(&self) -> Result<u64> {
        (**self).clear().await
    }

    async fn scan_all(&self) -> Result<Vec<NoteRecord>> {
        (**self).scan_all().await
    }

    async fn get(&self, id: NoteId) -> Result<Option<NoteRecord>> {
        (**self).get(id).await
    }

    async fn count(&self) -> Result<u64> {
        (**self).count().await
    }
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for Arc<S> {
    async fn get_setting(&self, key: SettingKey) -> Result<SettingValue> {
        (**self).get_setting(key).await
    }

    async fn set_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        (**self).set_setting(key, value).await
    }

    async fn load_settings(&self) -> Result<Settings> {
        (**self).load_settings().await
    }

    async fn reset_settings(&self) -> Result<()> {
        (**self).reset_settings().await
    }
}
