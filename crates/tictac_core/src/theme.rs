//! Light/dark theme preference.
//!
//! The theme is the only value that outlives a session. It is stored as a
//! plain string under [`THEME_KEY`] in whatever [`PreferenceStore`] the
//! frontend injects.

use derive_more::{Display, Error};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Key the theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Colour scheme of the frontend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Light background, dark marks.
    #[default]
    Light,
    /// Dark background, light marks.
    Dark,
}

impl Theme {
    /// Flips between `Light` and `Dark`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the control that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to Dark Mode",
            Self::Dark => "Switch to Light Mode",
        }
    }

    /// Reads the theme from a store. Missing or unknown values mean `Light`.
    #[instrument(skip(store))]
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!(%value, "Unknown theme preference, using default");
                Self::default()
            }),
            None => {
                debug!("No theme preference stored, using default");
                Self::default()
            }
        }
    }

    /// Writes the theme to a store.
    #[instrument(skip(store))]
    pub fn save(self, store: &mut impl PreferenceStore) -> Result<(), PrefsError> {
        store.set(THEME_KEY, self.as_ref())
    }
}

/// String key-value capability used to persist preferences.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference persistence error.
#[derive(Debug, Clone, Display, Error)]
#[display("Preference error: {} at {}:{}", message, file, line)]
pub struct PrefsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PrefsError {
    /// Creates a new preference error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to Light Mode");
    }

    #[test]
    fn test_string_form() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn test_load_defaults_to_light() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_load_ignores_unknown_value() {
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryPreferenceStore::new();
        Theme::Dark.save(&mut store).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}
