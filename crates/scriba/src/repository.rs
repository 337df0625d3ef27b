//! The repository: single gateway for note reads and writes.
//!
//! Mutations are serialized under one write lock covering
//! read-apply-persist-republish, so concurrent callers never interleave
//! their effects. Each successful mutation rescans the table and
//! publishes exactly one new snapshot; a failed mutation publishes
//! nothing and leaves subscribers on the last-good snapshot.

use std::sync::Arc;

use scriba_core::{NoteDraft, NoteId, NoteRecord, Snapshot};
use scriba_feed::{ChangeFeed, Subscription};
use scriba_store::{NoteStore, StorageError};
use tokio::sync::Mutex;

use crate::error::{Result, RepositoryError};

/// The mutation/read gateway above a [`NoteStore`].
///
/// Cheap to clone; clones share the same store and feed. The repository
/// owns its store outright - nothing else may write to it, which is what
/// keeps every mutation paired with exactly one published snapshot.
pub struct Repository<S: NoteStore> {
    inner: Arc<RepoInner<S>>,
}

impl<S: NoteStore> Clone for Repository<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct RepoInner<S> {
    /// The storage backend.
    store: S,

    /// Serializes mutations and guards the published version counter.
    write: Mutex<u64>,

    /// Fan-out of full-table snapshots.
    feed: ChangeFeed<Snapshot>,
}

impl<S: NoteStore + 'static> Repository<S> {
    /// Open a repository over an explicitly owned store.
    ///
    /// Seeds the feed with the store's current contents as version zero.
    pub async fn open(store: S) -> Result<Self> {
        let notes = store.scan_all().await?;
        let feed = ChangeFeed::new(Snapshot::new(0, notes));
        Ok(Self {
            inner: Arc::new(RepoInner {
                store,
                write: Mutex::new(0),
                feed,
            }),
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────────────────

    /// Subscribe to the live snapshot feed.
    ///
    /// The subscription starts at the current snapshot and then yields
    /// one snapshot per observed mutation, coalescing to the latest when
    /// the subscriber lags. Readers never block writers.
    pub fn subscribe(&self) -> Subscription<Snapshot> {
        self.inner.feed.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.feed.latest()
    }

    /// Read one note straight from the table.
    pub async fn get_note(&self, id: NoteId) -> Result<Option<NoteRecord>> {
        Ok(self.inner.store.get(id).await?)
    }

    /// Number of stored notes.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.inner.store.count().await?)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Add a note, returning its store-assigned id.
    ///
    /// Blank titles and bodies are accepted as-is; validation, if any,
    /// belongs to the caller.
    pub async fn add_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<NoteId> {
        let inner = Arc::clone(&self.inner);
        let draft = NoteDraft::new(title, content);
        finish_detached(tokio::spawn(async move { inner.add(draft).await })).await
    }

    /// Replace an existing note. The id must refer to a persisted row.
    pub async fn update_note(&self, note: &NoteRecord) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        let note = note.clone();
        finish_detached(tokio::spawn(async move { inner.update(note).await })).await
    }

    /// Delete one note. `Ok(0)` means there was nothing to delete.
    pub async fn delete_note(&self, id: NoteId) -> Result<u64> {
        let inner = Arc::clone(&self.inner);
        finish_detached(tokio::spawn(async move { inner.delete(id).await })).await
    }

    /// Delete every note, returning how many were removed.
    pub async fn clear_all_notes(&self) -> Result<u64> {
        let inner = Arc::clone(&self.inner);
        finish_detached(tokio::spawn(async move { inner.clear().await })).await
    }
}

impl<S: NoteStore> RepoInner<S> {
    async fn add(&self, draft: NoteDraft) -> Result<NoteId> {
        let mut version = self.write.lock().await;
        let id = self.store.insert(&draft).await.map_err(warn_fault)?;
        self.republish(&mut version).await?;
        Ok(id)
    }

    async fn update(&self, note: NoteRecord) -> Result<()> {
        let mut version = self.write.lock().await;
        self.store.update(&note).await.map_err(warn_fault)?;
        self.republish(&mut version).await?;
        Ok(())
    }

    async fn delete(&self, id: NoteId) -> Result<u64> {
        let mut version = self.write.lock().await;
        let removed = self.store.delete(id).await.map_err(warn_fault)?;
        self.republish(&mut version).await?;
        Ok(removed)
    }

    async fn clear(&self) -> Result<u64> {
        let mut version = self.write.lock().await;
        let removed = self.store.clear().await.map_err(warn_fault)?;
        self.republish(&mut version).await?;
        Ok(removed)
    }

    /// Rescan the table and publish the result as the next snapshot.
    ///
    /// Runs with the write lock held so versions are strictly ordered
    /// and a snapshot never reflects a half-applied mutation.
    async fn republish(&self, version: &mut u64) -> Result<()> {
        let notes = self.store.scan_all().await.map_err(warn_fault)?;
        *version += 1;
        self.feed.publish(Snapshot::new(*version, notes));
        Ok(())
    }
}

/// Await a spawned mutation without tying its fate to the caller.
///
/// The caller may be dropped mid-await; the task keeps running and still
/// publishes its result, so an abandoned screen cannot lose a write.
pub(crate) async fn finish_detached<T>(
    handle: tokio::task::JoinHandle<Result<T>>,
) -> Result<T> {
    match handle.await {
        Ok(result) => result,
        Err(err) => Err(RepositoryError::Internal(err.to_string())),
    }
}

pub(crate) fn warn_fault(err: StorageError) -> StorageError {
    tracing::warn!("storage fault: {err}");
    err
}
