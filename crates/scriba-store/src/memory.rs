//! In-memory implementation of the store traits.
//!
//! Primarily for testing. Same semantics as SQLite, but nothing
//! survives drop.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use scriba_core::{NoteDraft, NoteId, NoteRecord, SettingKey, SettingValue, Settings};

use crate::error::{Result, StorageError};
use crate::traits::{NoteStore, SettingsStore};

/// In-memory store implementation.
///
/// Thread-safe via RwLock. Ids come from a counter that only ever
/// increases, so deletion never frees an id for reuse.
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    /// Notes keyed by id; BTreeMap keeps scans id-ascending for free.
    notes: BTreeMap<NoteId, NoteRecord>,

    /// Next id to assign.
    next_id: u64,

    /// Written settings entries; unwritten keys read as defaults.
    settings: HashMap<SettingKey, SettingValue>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                notes: BTreeMap::new(),
                next_id: 1,
                settings: HashMap::new(),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert(&self, draft: &NoteDraft) -> Result<NoteId> {
        let mut inner = self.inner.write().unwrap();
        let id = NoteId::new(inner.next_id);
        inner.next_id += 1;
        inner.notes.insert(id, draft.clone().into_record(id));
        Ok(id)
    }

    async fn update(&self, note: &NoteRecord) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        match inner.notes.get_mut(&note.id) {
            Some(slot) => {
                *slot = note.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound(note.id)),
        }
    }

    async fn delete(&self, id: NoteId) -> Result<u64> {
        let mut inner = self.inner.write().unwrap();
        Ok(u64::from(inner.notes.remove(&id).is_some()))
    }

    async fn clear(&self) -> Result<u64> {
        let mut inner = self.inner.write().unwrap();
        let removed = inner.notes.len() as u64;
        inner.notes.clear();
        Ok(removed)
    }

    async fn scan_all(&self) -> Result<Vec<NoteRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.notes.values().cloned().collect())
    }

    async fn get(&self, id: NoteId) -> Result<Option<NoteRecord>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.notes.get(&id).cloned())
    }

    async fn count(&self) -> Result<u64> {
        let inner = self.inner.read().unwrap();
        Ok(inner.notes.len() as u64)
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get_setting(&self, key: SettingKey) -> Result<SettingValue> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .settings
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value()))
    }

    async fn set_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.settings.insert(key, value);
        Ok(())
    }

    async fn load_settings(&self) -> Result<Settings> {
        let inner = self.inner.read().unwrap();
        let mut settings = Settings::default();
        for key in SettingKey::ALL {
            if let Some(value) = inner.settings.get(&key) {
                settings.set(key, value.clone());
            }
        }
        Ok(settings)
    }

    async fn reset_settings(&self) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.settings.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.insert(&NoteDraft::new("a", "")).await.unwrap();
        let b = store.insert(&NoteDraft::new("b", "")).await.unwrap();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryStore::new();
        let a = store.insert(&NoteDraft::new("a", "")).await.unwrap();
        store.delete(a).await.unwrap();
        let b = store.insert(&NoteDraft::new("b", "")).await.unwrap();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_scan_is_id_ascending() {
        let store = MemoryStore::new();
        for title in ["x", "y", "z"] {
            store.insert(&NoteDraft::new(title, "")).await.unwrap();
        }
        let notes = store.scan_all().await.unwrap();
        assert!(notes.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let ghost = NoteDraft::new("x", "").into_record(NoteId::new(5));
        assert!(matches!(
            store.update(&ghost).await.unwrap_err(),
            StorageError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_and_clear_counts() {
        let store = MemoryStore::new();
        let id = store.insert(&NoteDraft::new("a", "")).await.unwrap();
        store.insert(&NoteDraft::new("b", "")).await.unwrap();
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert_eq!(store.clear().await.unwrap(), 1);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_settings_defaults_and_reset() {
        let store = MemoryStore::new();
        assert_eq!(
            store.get_setting(SettingKey::ViewMode).await.unwrap(),
            SettingValue::Bool(true)
        );

        store
            .set_setting(SettingKey::ViewMode, SettingValue::Bool(false))
            .await
            .unwrap();
        assert!(!store.load_settings().await.unwrap().view_mode);

        store.reset_settings().await.unwrap();
        assert_eq!(store.load_settings().await.unwrap(), Settings::default());
    }
}
