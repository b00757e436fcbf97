//! TOML-file backed preference store.

use derive_getters::Getters;
use std::path::{Path, PathBuf};
use tictac_core::{PreferenceStore, PrefsError};
use toml::{Table, Value};
use tracing::{debug, info, instrument, warn};

/// Preference store persisted as a TOML table.
///
/// Only string entries are served through [`PreferenceStore`]; other
/// entries are kept and written back untouched. The whole table is
/// rewritten on every `set`.
#[derive(Debug, Clone, Getters)]
pub struct FilePreferenceStore {
    /// File the table is read from and written to.
    path: PathBuf,
    #[getter(skip)]
    values: Table,
}

impl FilePreferenceStore {
    /// Opens the store at `path`.
    ///
    /// A missing, unreadable or malformed file starts an empty table; the
    /// file is replaced on the next `set`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            debug!("Loading preferences from file");
            match Self::read(&path) {
                Ok(values) => values,
                Err(e) => {
                    warn!(error = %e, "Ignoring unusable preference file");
                    Table::new()
                }
            }
        } else {
            debug!("No preference file yet");
            Table::new()
        };

        info!(entries = values.len(), "Preferences loaded");
        Self { path, values }
    }

    fn read(path: &Path) -> Result<Table, PrefsError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PrefsError::new(format!("Failed to read preference file: {}", e)))?;
        toml::from_str::<Table>(&content)
            .map_err(|e| PrefsError::new(format!("Failed to parse preference file: {}", e)))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn write(&self) -> Result<(), PrefsError> {
        let content = toml::to_string(&self.values).map_err(|e| {
            PrefsError::new(format!("Failed to serialize preferences: {}", e))
        })?;
        std::fs::write(&self.path, content).map_err(|e| {
            PrefsError::new(format!("Failed to write preference file: {}", e))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::String(value) => Some(value.clone()),
            other => {
                warn!(key, kind = other.type_str(), "Preference is not a string");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self.write()
    }
}
