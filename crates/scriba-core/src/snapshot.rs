//! Snapshots: the full note list at one logical mutation step.

use std::sync::Arc;

use crate::note::{NoteId, NoteRecord};

/// An immutable view of all notes at one logical mutation step.
///
/// Notes are ordered by id ascending. Cloning is cheap because the list
/// is shared; holders can never mutate store state through a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    version: u64,
    notes: Arc<[NoteRecord]>,
}

impl Snapshot {
    /// Build a snapshot for a given mutation step.
    pub fn new(version: u64, notes: Vec<NoteRecord>) -> Self {
        Self {
            version,
            notes: notes.into(),
        }
    }

    /// The empty, version-zero snapshot.
    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    /// The mutation step this snapshot belongs to.
    ///
    /// Strictly increases with every published snapshot; no two
    /// mutations share a version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All notes, ordered by id ascending.
    pub fn notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    /// Number of notes in this snapshot.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id.
    pub fn get(&self, id: NoteId) -> Option<&NoteRecord> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Iterate over the notes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NoteRecord> {
        self.notes.iter()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
