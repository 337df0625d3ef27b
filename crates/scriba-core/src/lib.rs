//! # Scriba Core
//!
//! Pure domain model for the Scriba notes engine: records, snapshots,
//! settings, and the search projection.
//!
//! This crate contains no I/O, no storage, no async. It is pure
//! computation over plain data.
//!
//! ## Key Types
//!
//! - [`NoteRecord`] - A persisted note row
//! - [`NoteDraft`] - A note that has not been persisted yet
//! - [`NoteId`] - Row identity, assigned by the store
//! - [`Snapshot`] - The full note list at one mutation step
//! - [`NoteQuery`] - Pure filter + pinned-first sort over a note list
//! - [`Settings`] - The preference bundle with documented defaults
//!
//! ## Ordering
//!
//! Snapshots carry notes ordered by id ascending, and every published
//! snapshot has a strictly larger version than the one before it. The
//! query projection is the only place display order deviates from id
//! order, and it does so deterministically (pinned first, ties stable).

pub mod note;
pub mod query;
pub mod settings;
pub mod snapshot;

pub use note::{NoteDraft, NoteId, NoteRecord};
pub use query::NoteQuery;
pub use settings::{SettingKey, SettingValue, Settings};
pub use snapshot::Snapshot;
