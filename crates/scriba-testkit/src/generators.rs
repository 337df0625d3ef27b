//! Proptest generators for property-based testing.

use proptest::prelude::*;
use scriba_core::{NoteDraft, NoteId, NoteRecord, SettingKey, SettingValue};

/// Generate a short title, possibly empty.
pub fn title() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => "[A-Za-z0-9 ]{1,24}".prop_map(String::from),
    ]
}

/// Generate body text, possibly empty.
pub fn content() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => "[A-Za-z0-9 .,!]{1,120}".prop_map(String::from),
    ]
}

/// Generate an unpersisted draft.
pub fn draft() -> impl Strategy<Value = NoteDraft> {
    (title(), content(), any::<bool>()).prop_map(|(title, content, pinned)| NoteDraft {
        title,
        content,
        pinned,
    })
}

/// Generate a persisted record carrying the given id.
pub fn record(id: u64) -> impl Strategy<Value = NoteRecord> {
    draft().prop_map(move |d| d.into_record(NoteId::new(id)))
}

/// Generate a search string, biased toward short fragments.
pub fn search() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        3 => "[a-z]{1,6}".prop_map(String::from),
    ]
}

/// One step of a mutation script.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Insert a fresh note.
    Add(NoteDraft),
    /// Toggle the pin on the nth live note, if any.
    TogglePin(usize),
    /// Delete the nth live note, if any.
    Delete(usize),
    /// Delete everything.
    Clear,
}

/// Generate a mutation script, weighted toward inserts.
pub fn mutations(max_len: usize) -> impl Strategy<Value = Vec<Mutation>> {
    prop::collection::vec(
        prop_oneof![
            4 => draft().prop_map(Mutation::Add),
            2 => (0usize..8).prop_map(Mutation::TogglePin),
            2 => (0usize..8).prop_map(Mutation::Delete),
            1 => Just(Mutation::Clear),
        ],
        0..=max_len,
    )
}

/// Generate a value of the right shape for `key`.
pub fn setting_value(key: SettingKey) -> BoxedStrategy<SettingValue> {
    match key.default_value() {
        SettingValue::Bool(_) => any::<bool>().prop_map(SettingValue::Bool).boxed(),
        SettingValue::Text(_) => "[ -~]{0,32}".prop_map(SettingValue::Text).boxed(),
    }
}
