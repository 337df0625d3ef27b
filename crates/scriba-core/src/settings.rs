//! User settings: a closed set of typed preference keys.
//!
//! Keys are an enum rather than free strings so a typo cannot invent a
//! preference or silently lose its default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of preference keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Dark color scheme toggle. Defaults to `false`.
    DarkMode,
    /// Display name. Defaults to empty.
    UserName,
    /// Contact email. Defaults to empty.
    UserEmail,
    /// List layout: `true` = grid, `false` = linear. Defaults to `true`.
    ViewMode,
}

impl SettingKey {
    /// Every key, in storage order.
    pub const ALL: [SettingKey; 4] = [
        SettingKey::DarkMode,
        SettingKey::UserName,
        SettingKey::UserEmail,
        SettingKey::ViewMode,
    ];

    /// Stable storage name for this key.
    pub const fn name(&self) -> &'static str {
        match self {
            SettingKey::DarkMode => "dark_mode",
            SettingKey::UserName => "user_name",
            SettingKey::UserEmail => "user_email",
            SettingKey::ViewMode => "view_mode",
        }
    }

    /// Documented default for this key.
    pub fn default_value(&self) -> SettingValue {
        match self {
            SettingKey::DarkMode => SettingValue::Bool(false),
            SettingKey::UserName => SettingValue::Text(String::new()),
            SettingKey::UserEmail => SettingValue::Text(String::new()),
            SettingKey::ViewMode => SettingValue::Bool(true),
        }
    }

    /// Parse a stored string back into a typed value.
    ///
    /// Falls back to the key's default when the stored text does not
    /// decode as the key's type.
    pub fn decode(&self, raw: &str) -> SettingValue {
        match self.default_value() {
            SettingValue::Bool(_) => match raw {
                "true" => SettingValue::Bool(true),
                "false" => SettingValue::Bool(false),
                _ => self.default_value(),
            },
            SettingValue::Text(_) => SettingValue::Text(raw.to_string()),
        }
    }

    /// Look up a key by its storage name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed preference value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            SettingValue::Text(_) => None,
        }
    }

    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(value) => Some(value),
            SettingValue::Bool(_) => None,
        }
    }

    /// Stable storage encoding.
    pub fn encode(&self) -> String {
        match self {
            SettingValue::Bool(value) => value.to_string(),
            SettingValue::Text(value) => value.clone(),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// The full preference bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Dark color scheme toggle.
    pub dark_mode: bool,
    /// Display name.
    pub user_name: String,
    /// Contact email.
    pub user_email: String,
    /// List layout: `true` = grid, `false` = linear.
    pub view_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            user_name: String::new(),
            user_email: String::new(),
            view_mode: true,
        }
    }
}

impl Settings {
    /// Read one key out of the bundle.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::DarkMode => SettingValue::Bool(self.dark_mode),
            SettingKey::UserName => SettingValue::Text(self.user_name.clone()),
            SettingKey::UserEmail => SettingValue::Text(self.user_email.clone()),
            SettingKey::ViewMode => SettingValue::Bool(self.view_mode),
        }
    }

    /// Write one key into the bundle.
    ///
    /// A value of the wrong shape for the key falls back to the key's
    /// default, the same outcome a decode of bad stored data yields.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) {
        match key {
            SettingKey::DarkMode => self.dark_mode = value.as_bool().unwrap_or(false),
            SettingKey::UserName => {
                self.user_name = value.as_text().unwrap_or_default().to_string();
            }
            SettingKey::UserEmail => {
                self.user_email = value.as_text().unwrap_or_default().to_string();
            }
            SettingKey::ViewMode => self.view_mode = value.as_bool().unwrap_or(true),
        }
    }
}
