//! # Scriba
//!
//! A reactive, single-device notes store: durable note rows and user
//! settings behind live snapshot feeds.
//!
//! ## Overview
//!
//! - **Records**: short text notes with a store-assigned, monotonic id,
//!   a title, a body, and a pinned flag.
//! - **Snapshots**: every successful mutation publishes exactly one new
//!   snapshot of the full note list, strictly ordered by version.
//! - **Feeds**: subscribers receive the current state plus every
//!   subsequent state; slow subscribers coalesce to the latest value and
//!   never block writers.
//! - **Settings**: a closed set of typed preferences with documented
//!   defaults and their own live feed.
//!
//! ## Key Concepts
//!
//! - **Single writer**: all mutations flow through [`Repository`] (or
//!   [`SettingsManager`] for preferences), which serializes them and
//!   owns its store outright.
//! - **Publish on success only**: a failed write leaves subscribers on
//!   the last-good snapshot.
//! - **Detached mutations**: a caller that abandons an in-flight write
//!   does not cancel it; the write completes and publishes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use scriba::store::SqliteStore;
//! use scriba::{Repository, SettingsManager};
//!
//! async fn example() {
//!     // One database file carries both the notes and the settings.
//!     let store = Arc::new(SqliteStore::open("scriba.db").unwrap());
//!     let repo = Repository::open(Arc::clone(&store)).await.unwrap();
//!     let settings = SettingsManager::open(store).await.unwrap();
//!
//!     let mut notes = repo.subscribe();
//!     let id = repo.add_note("Groceries", "Milk, eggs").await.unwrap();
//!     let snapshot = notes.next().await.unwrap();
//!     assert!(snapshot.get(id).is_some());
//!
//!     settings.set_dark_mode(true).await.unwrap();
//!     assert!(settings.dark_mode());
//! }
//! ```

pub mod error;
pub mod repository;
pub mod settings;

// Re-export component crates
pub use scriba_core as core;
pub use scriba_feed as feed;
pub use scriba_store as store;

// Re-export main types for convenience
pub use error::{RepositoryError, Result};
pub use repository::Repository;
pub use settings::SettingsManager;

// Re-export commonly used component types
pub use scriba_core::{
    NoteDraft, NoteId, NoteQuery, NoteRecord, SettingKey, SettingValue, Settings, Snapshot,
};
pub use scriba_feed::{ChangeFeed, Subscription};
pub use scriba_store::{MemoryStore, NoteStore, SettingsStore, SqliteStore, StorageError};
