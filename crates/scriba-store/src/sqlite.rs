//! SQLite implementation of the store traits.
//!
//! This is the primary storage backend. It uses rusqlite with bundled
//! SQLite, wrapped in async via `tokio::task::spawn_blocking`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use scriba_core::{NoteDraft, NoteId, NoteRecord, SettingKey, SettingValue, Settings};

use crate::error::{Result, StorageError};
use crate::migration;
use crate::traits::{NoteStore, SettingsStore};

/// SQLite-based store implementation.
///
/// Thread-safe via an internal mutex; every operation runs under
/// `spawn_blocking` so it never stalls the async runtime. One instance
/// serves both the note table and the settings map.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a blocking closure against the connection, off the runtime.
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|e| StorageError::WriteFailed(format!("connection mutex poisoned: {e}")))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| StorageError::WriteFailed(format!("spawn_blocking failed: {e}")))?
    }
}

// Helper to convert a row to a NoteRecord.
fn row_to_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<NoteRecord> {
    Ok(NoteRecord {
        id: NoteId::new(row.get("id")?),
        title: row.get("title")?,
        content: row.get("content")?,
        pinned: row.get("pinned")?,
    })
}

#[async_trait]
impl NoteStore for SqliteStore {
    async fn insert(&self, draft: &NoteDraft) -> Result<NoteId> {
        let draft = draft.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO notes (title, content, pinned) VALUES (?1, ?2, ?3)",
                params![draft.title, draft.content, draft.pinned],
            )?;
            Ok(NoteId::new(conn.last_insert_rowid() as u64))
        })
        .await
    }

    async fn update(&self, note: &NoteRecord) -> Result<()> {
        let note = note.clone();
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE notes SET title = ?2, content = ?3, pinned = ?4 WHERE id = ?1",
                params![note.id.raw(), note.title, note.content, note.pinned],
            )?;
            if changed == 0 {
                return Err(StorageError::NotFound(note.id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: NoteId) -> Result<u64> {
        self.with_conn(move |conn| {
            let removed = conn.execute("DELETE FROM notes WHERE id = ?1", params![id.raw()])?;
            Ok(removed as u64)
        })
        .await
    }

    async fn clear(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM notes", [])?;
            Ok(removed as u64)
        })
        .await
    }

    async fn scan_all(&self) -> Result<Vec<NoteRecord>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, content, pinned FROM notes ORDER BY id ASC")?;
            let rows = stmt.query_map([], row_to_note)?;
            let mut notes = Vec::new();
            for row in rows {
                notes.push(row?);
            }
            Ok(notes)
        })
        .await
    }

    async fn get(&self, id: NoteId) -> Result<Option<NoteRecord>> {
        self.with_conn(move |conn| {
            let note = conn
                .query_row(
                    "SELECT id, title, content, pinned FROM notes WHERE id = ?1",
                    params![id.raw()],
                    row_to_note,
                )
                .optional()?;
            Ok(note)
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: u64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
    }
}

#[async_trait]
impl SettingsStore for SqliteStore {
    async fn get_setting(&self, key: SettingKey) -> Result<SettingValue> {
        self.with_conn(move |conn| {
            let raw: Option<String> = conn
                .query_row(
                    "SELECT value FROM settings WHERE key = ?1",
                    params![key.name()],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(match raw {
                Some(raw) => key.decode(&raw),
                None => key.default_value(),
            })
        })
        .await
    }

    async fn set_setting(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let encoded = value.encode();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key.name(), encoded],
            )?;
            Ok(())
        })
        .await
    }

    async fn load_settings(&self) -> Result<Settings> {
        self.with_conn(|conn| {
            let mut settings = Settings::default();
            let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let name: String = row.get(0)?;
                let raw: String = row.get(1)?;
                // Rows from retired keys are ignored.
                if let Some(key) = SettingKey::from_name(&name) {
                    settings.set(key, key.decode(&raw));
                }
            }
            Ok(settings)
        })
        .await
    }

    async fn reset_settings(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM settings", [])?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = SqliteStore::open_memory().unwrap();
        let id = store
            .insert(&NoteDraft::new("Groceries", "Milk, eggs"))
            .await
            .unwrap();
        assert!(id.is_saved());

        let note = store.get(id).await.unwrap().unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "Milk, eggs");
        assert!(!note.pinned);
    }

    #[tokio::test]
    async fn test_scan_orders_by_id_ascending() {
        let store = SqliteStore::open_memory().unwrap();
        for title in ["A", "B", "C"] {
            store.insert(&NoteDraft::new(title, "")).await.unwrap();
        }
        let notes = store.scan_all().await.unwrap();
        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert!(notes.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_update_replaces_whole_row() {
        let store = SqliteStore::open_memory().unwrap();
        let id = store.insert(&NoteDraft::new("old", "old")).await.unwrap();
        let mut note = store.get(id).await.unwrap().unwrap();
        note.title = "new".into();
        note.pinned = true;
        store.update(&note).await.unwrap();

        let reread = store.get(id).await.unwrap().unwrap();
        assert_eq!(reread, note);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let store = SqliteStore::open_memory().unwrap();
        let ghost = NoteDraft::new("x", "y").into_record(NoteId::new(99));
        let err = store.update(&ghost).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(id) if id == NoteId::new(99)));
    }

    #[tokio::test]
    async fn test_delete_reports_removed_count() {
        let store = SqliteStore::open_memory().unwrap();
        let id = store.insert(&NoteDraft::new("a", "")).await.unwrap();
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_reports_removed_count() {
        let store = SqliteStore::open_memory().unwrap();
        for i in 0..3 {
            store.insert(&NoteDraft::new(format!("n{i}"), "")).await.unwrap();
        }
        assert_eq!(store.clear().await.unwrap(), 3);
        assert_eq!(store.clear().await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = SqliteStore::open_memory().unwrap();
        let first = store.insert(&NoteDraft::new("first", "")).await.unwrap();
        let second = store.insert(&NoteDraft::new("second", "")).await.unwrap();
        assert!(second > first);

        store.delete(second).await.unwrap();
        let third = store.insert(&NoteDraft::new("third", "")).await.unwrap();
        assert!(third > second);
    }

    #[tokio::test]
    async fn test_settings_read_defaults_before_write() {
        let store = SqliteStore::open_memory().unwrap();
        for key in SettingKey::ALL {
            assert_eq!(store.get_setting(key).await.unwrap(), key.default_value());
        }
    }

    #[tokio::test]
    async fn test_settings_set_get_and_reset() {
        let store = SqliteStore::open_memory().unwrap();
        store
            .set_setting(SettingKey::DarkMode, SettingValue::Bool(true))
            .await
            .unwrap();
        store
            .set_setting(SettingKey::UserName, SettingValue::Text("Ada".into()))
            .await
            .unwrap();

        let settings = store.load_settings().await.unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.user_name, "Ada");

        store.reset_settings().await.unwrap();
        assert_eq!(store.load_settings().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_notes_and_settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scriba.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(&NoteDraft::new("persisted", "body")).await.unwrap();
            store
                .set_setting(SettingKey::ViewMode, SettingValue::Bool(false))
                .await
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let notes = store.scan_all().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "persisted");
        assert!(!store.load_settings().await.unwrap().view_mode);
    }
}
