//! Filesystem persistence for the current document and saved projects.
//!
//! A [`StateStore`] mirrors every committed document to `state.json` and the
//! project collection to `projects.json` inside its data directory. Writes
//! are best effort: failures are logged and never surface to the editor.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{DocumentState, ProjectCatalog};

/// File holding the current document.
pub const STATE_FILE: &str = "state.json";

/// File holding the saved project collection.
pub const PROJECTS_FILE: &str = "projects.json";

/// Suffix appended to a data file that could not be loaded.
pub const CORRUPT_SUFFIX: &str = "corrupt";

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred during persistence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Document and project storage.
///
/// # Example
///
/// ```
/// use pagewright_core::store::StateStore;
/// use pagewright_core::DocumentState;
///
/// // Without a data directory nothing is written or read.
/// let store = StateStore::new();
/// store.persist_state(&DocumentState::new());
/// assert!(store.load_state().expect("load").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    /// Optional data directory for filesystem persistence.
    data_dir: Option<PathBuf>,
}

impl StateStore {
    /// Create a store with no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with filesystem persistence.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir: Some(data_dir),
        })
    }

    /// The configured data directory, if any.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Save the current document to disk as JSON.
    ///
    /// No-op if the store was created without a data directory.
    pub fn persist_state(&self, state: &DocumentState) {
        self.write_json(STATE_FILE, state);
    }

    /// Save the project collection to disk as JSON.
    ///
    /// No-op if the store was created without a data directory.
    pub fn persist_projects(&self, projects: &ProjectCatalog) {
        self.write_json(PROJECTS_FILE, projects);
    }

    /// Load the persisted document.
    ///
    /// Returns `Ok(None)` when there is no data directory or nothing has
    /// been saved yet. Documents saved without brand tokens load with the
    /// default brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load_state(&self) -> Result<Option<DocumentState>, StoreError> {
        self.read_json(STATE_FILE)
    }

    /// Load the saved project collection, empty when nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load_projects(&self) -> Result<ProjectCatalog, StoreError> {
        Ok(self.read_json(PROJECTS_FILE)?.unwrap_or_default())
    }

    /// Rename an unreadable data file to `<file>.corrupt` so later writes
    /// leave it intact. Returns the new path.
    ///
    /// No-op when there is no data directory or the file is missing.
    #[must_use]
    pub fn set_aside(&self, file: &str) -> Option<PathBuf> {
        let data_dir = self.data_dir.as_ref()?;
        let path = data_dir.join(file);
        if !path.exists() {
            return None;
        }
        let target = data_dir.join(format!("{file}.{CORRUPT_SUFFIX}"));
        match std::fs::rename(&path, &target) {
            Ok(()) => {
                tracing::warn!("Moved unreadable {} to {}", path.display(), target.display());
                Some(target)
            }
            Err(e) => {
                tracing::warn!("Failed to set aside {}: {e}", path.display());
                None
            }
        }
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) {
        let Some(ref data_dir) = self.data_dir else {
            return;
        };
        let json = match serde_json::to_string_pretty(value) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("Failed to serialize {file}: {e}");
                return;
            }
        };
        let path = data_dir.join(file);
        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!("Failed to persist {}: {e}", path.display());
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, StoreError> {
        let Some(ref data_dir) = self.data_dir else {
            return Ok(None);
        };
        let path = data_dir.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Some(value))
    }
}

/// Get the current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        // Timestamp will not exceed u64 max for millennia
        #[allow(clippy::cast_possible_truncation)]
        {
            d.as_millis() as u64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, ElementId, ElementKind, Theme};

    fn sample_state() -> DocumentState {
        DocumentState::new()
            .with_appended(Element::new(ElementId::from("node-1"), ElementKind::Card))
            .with_theme(Theme::Glass)
    }

    #[test]
    fn test_persistence_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::with_data_dir(dir.path()).expect("store");
        store.persist_state(&sample_state());

        let store2 = StateStore::with_data_dir(dir.path()).expect("store2");
        let loaded = store2.load_state().expect("load").expect("saved state");
        assert_eq!(loaded, sample_state());
    }

    #[test]
    fn test_load_before_first_save_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::with_data_dir(dir.path()).expect("store");
        assert!(store.load_state().expect("load").is_none());
        assert!(store.load_projects().expect("load").is_empty());
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(STATE_FILE), "{ nope").expect("write");
        let store = StateStore::with_data_dir(dir.path()).expect("store");
        assert!(matches!(
            store.load_state(),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_aside_keeps_unreadable_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(STATE_FILE), "{ nope").expect("write");
        let store = StateStore::with_data_dir(dir.path()).expect("store");

        let moved = store.set_aside(STATE_FILE).expect("moved");
        assert_eq!(moved, dir.path().join("state.json.corrupt"));
        assert_eq!(std::fs::read_to_string(&moved).expect("read"), "{ nope");
        assert!(store.load_state().expect("load").is_none());
        assert!(store.set_aside(STATE_FILE).is_none());
    }

    #[test]
    fn test_state_without_brand_loads_default_brand() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(STATE_FILE),
            r#"{ "elements": [], "theme": "light", "columns": 1 }"#,
        )
        .expect("write");
        let store = StateStore::with_data_dir(dir.path()).expect("store");
        let loaded = store.load_state().expect("load").expect("state");
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.brand, crate::BrandKit::default());
    }

    #[test]
    fn test_projects_persist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::with_data_dir(dir.path()).expect("store");
        let mut projects = ProjectCatalog::default();
        projects.save("Landing", sample_state());
        store.persist_projects(&projects);

        let loaded = store.load_projects().expect("load");
        assert_eq!(loaded.names(), vec!["Landing"]);
        assert_eq!(
            loaded.get("Landing").map(|p| &p.state),
            Some(&sample_state())
        );
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let store = StateStore::with_data_dir(&nested).expect("store");
        store.persist_state(&DocumentState::new());
        assert!(nested.join(STATE_FILE).exists());
    }
}
