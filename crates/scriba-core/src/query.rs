//! The search projection: filter plus pinned-first sort.
//!
//! Re-derived in full on every new snapshot and on every search edit, so
//! it has to stay cheap: one linear pass and a stable sort.

use crate::note::NoteRecord;

/// Caller-held search state over the note list.
///
/// The projection keeps notes whose title or body contains the search
/// string case-insensitively (an empty search keeps everything), then
/// moves pinned notes ahead of unpinned ones without disturbing the
/// relative order inside either group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteQuery {
    search: String,
}

impl NoteQuery {
    /// Query with the given search string.
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    /// The current search string.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search string.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Derive the projected list from `notes`.
    ///
    /// Pure and side-effect free. Input order is preserved among notes
    /// with the same pinned flag (`sort_by_key` is stable).
    pub fn apply(&self, notes: &[NoteRecord]) -> Vec<NoteRecord> {
        let needle = self.search.to_lowercase();
        let mut out: Vec<NoteRecord> = notes
            .iter()
            .filter(|note| note.matches(&needle))
            .cloned()
            .collect();
        out.sort_by_key(|note| !note.pinned);
        out
    }
}
