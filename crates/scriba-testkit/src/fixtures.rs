//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use scriba::{Repository, SettingsManager};
use scriba_core::{NoteDraft, NoteId, NoteRecord, SettingKey, SettingValue, Settings};
use scriba_store::{MemoryStore, NoteStore, Result, SettingsStore, StorageError};

/// A repository and settings gateway over one shared in-memory store.
pub struct TestFixture {
    pub repo: Repository<Arc<MemoryStore>>,
    pub settings: SettingsManager<Arc<MemoryStore>>,
}

impl TestFixture {
    /// Fresh fixture over an empty in-memory store.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let repo = Repository::open(Arc::clone(&store))
            .await
            .expect("open repository");
        let settings = SettingsManager::open(store)
            .await
            .expect("open settings manager");
        Self { repo, settings }
    }

    /// Fixture pre-seeded with `count` numbered notes.
    pub async fn seeded(count: usize) -> Self {
        let fixture = Self::new().await;
        for i in 0..count {
            fixture
                .repo
                .add_note(format!("note {i}"), format!("body {i}"))
                .await
                .expect("seed note");
        }
        fixture
    }
}

/// The three-note working set used across the tests: Milk, Eggs
/// (pinned), Milkshake.
pub fn grocery_notes() -> Vec<NoteDraft> {
    vec![
        NoteDraft::new("Milk", "two liters"),
        NoteDraft::new("Eggs", "a dozen").pinned(true),
        NoteDraft::new("Milkshake", "treat"),
    ]
}

/// Store wrapper that injects write failures on demand.
///
/// Reads always pass through; while `fail_writes(true)` is set, every
/// mutating call fails with [`StorageError::WriteFailed`] before
/// touching the wrapped store.
pub struct FlakyStore<S> {
    inner: S,
    fail_writes: AtomicBool,
}

impl<S> FlakyStore<S> {
    /// Wrap a store; injection starts disabled.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Toggle write-failure injection.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn gate(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(StorageError::WriteFailed("injected write failure".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<S: NoteStore> NoteStore for FlakyStore<S> {
    async fn insert(&self, draft: &NoteDraft) -> Result<NoteId> {
        self.gate()?;
        self.inner.insert(draft).await
    }

    async fn update(&self, note: &NoteRecord) -> Result<()> {
        self.gate()?;
        self.inner.update(note).await
    }

    async fn delete(&self, id: NoteId) -> Result<u64> {
        self.gate()?;
        self.inner.delete(id).await
    }

    async fn clear(&self) -> Result<u64> {
        self.gate()?;
        self.inner.clear().await
    }

    async fn scan_all(&self) -> Result<Vec<NoteRecord>> {
        self.inner.scan_all().await
    }

    async fn get(&self, id: NoteId) -> Result<Option<NoteRecord>> {
        self.inner.get(id).await
    }

    async fn count(&self) -> Result<u64> {
        self.inner.count().await
    }
}

#[async_trait]
impl<S: SettingsStore> SettingsStore for FlakyStore<S> {
    async fn get_setting(&self, key: SettingKey) -> Result<SettingValue> {
        self.inner.get_setting(key).await
    }

    async fn set_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.gate()?;
        self.inner.set_setting(key, value).await
    }

    async fn load_settings(&self) -> Result<Settings> {
        self.inner.load_settings().await
    }

    async fn reset_settings(&self) -> Result<()> {
        self.gate()?;
        self.inner.reset_settings().await
    }
}
