//! # Scriba Store
//!
//! Storage abstraction for the Scriba notes engine. Provides trait-based
//! interfaces for note and settings persistence with SQLite and
//! in-memory implementations.
//!
//! ## Overview
//!
//! The store module hides durable storage behind the [`NoteStore`] and
//! [`SettingsStore`] traits, keeping the repository storage-agnostic.
//! The primary implementation is [`SqliteStore`], with [`MemoryStore`]
//! for testing. Both implement both traits over the same instance, so a
//! single database file carries the note table and the settings map.
//!
//! ## Key Types
//!
//! - [`NoteStore`] - Async trait for durable note rows
//! - [`SettingsStore`] - Async trait for durable preference entries
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`StorageError`] - Failure taxonomy shared by all backends
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scriba_core::NoteDraft;
//! use scriba_store::{NoteStore, SqliteStore};
//!
//! async fn example() {
//!     let store = SqliteStore::open("notes.db").unwrap();
//!     let id = store.insert(&NoteDraft::new("Groceries", "Milk")).await.unwrap();
//!     let all = store.scan_all().await.unwrap();
//!     assert_eq!(all.last().unwrap().id, id);
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Monotonic identity**: inserted ids only ever increase; a deleted
//!   id is never handed out again.
//! - **Whole rows**: every write lands fully or not at all.
//! - **Deterministic scans**: `scan_all` orders by id ascending.
//! - **No publication here**: stores do not fan out changes; the
//!   repository owns the store and is the only writer, which is what
//!   keeps every mutation paired with exactly one published snapshot.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StorageError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{NoteStore, SettingsStore};
