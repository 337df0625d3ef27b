//! Note records and their identity.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identity for a note, assigned by the store at insert time.
///
/// [`NoteId::UNSAVED`] (zero) marks a record that has not been persisted.
/// Every persisted note has an id greater than zero, unique within the
/// table; ids increase monotonically and are never reused after deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NoteId(u64);

impl NoteId {
    /// Sentinel for "not yet persisted".
    pub const UNSAVED: Self = Self(0);

    /// Create a NoteId from a raw row id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw row id.
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Whether this id refers to a persisted row.
    pub const fn is_saved(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A persisted note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Row identity. Immutable once assigned.
    pub id: NoteId,
    /// Title text. May be empty.
    pub title: String,
    /// Body text. May be empty.
    pub content: String,
    /// Pinned notes sort ahead of unpinned ones in the search projection.
    pub pinned: bool,
}

impl NoteRecord {
    /// True if the title or body contains `needle` case-insensitively.
    ///
    /// `needle` must already be lowercased; an empty needle matches
    /// every record.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// A note that has not been persisted yet.
///
/// The store assigns the id at insert time; callers never pick one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Title text. May be empty.
    pub title: String,
    /// Body text. May be empty.
    pub content: String,
    /// Whether the note starts out pinned. New notes default to unpinned.
    pub pinned: bool,
}

impl NoteDraft {
    /// New unpinned draft.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            pinned: false,
        }
    }

    /// Set the pinned flag.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Attach a store-assigned id, producing the persisted record.
    pub fn into_record(self, id: NoteId) -> NoteRecord {
        NoteRecord {
            id,
            title: self.title,
            content: self.content,
            pinned: self.pinned,
        }
    }
}
