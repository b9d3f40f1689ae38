use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::models::{RootStore, Theme};

/// Version written by this build (native OKLCH curves)
pub const CURRENT_VERSION: &str = "2.0";

/// Version written by both the HSL and the early OKLCH editors
pub const LEGACY_VERSION: &str = "1.0";

fn legacy_version() -> String {
    LEGACY_VERSION.to_string()
}

/// Serialized form of the whole theme collection
///
/// Unknown top-level fields (such as old UI state) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "legacy_version")]
    pub version: String,

    #[serde(default)]
    pub themes: Vec<Theme>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// JSON state file on disk
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; a missing file is `None`
    pub fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No state file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&content)?;
        tracing::info!(
            path = %self.path.display(),
            version = %snapshot.version,
            themes = snapshot.themes.len(),
            "Loaded state"
        );
        Ok(Some(snapshot))
    }

    /// Write the snapshot through a sibling temp file and rename it into place
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            themes = snapshot.themes.len(),
            "Saved state"
        );
        Ok(())
    }

    /// Load the store, starting from the default collection if there is no file
    pub fn load_store(&self) -> Result<RootStore, PersistenceError> {
        match self.load()? {
            Some(snapshot) => RootStore::from_snapshot(snapshot),
            None => Ok(RootStore::default()),
        }
    }

    /// Save the store stamped with the current time
    pub fn save_store(&self, store: &RootStore) -> Result<(), PersistenceError> {
        let snapshot = Snapshot {
            saved_at: Some(Utc::now()),
            ..store.to_snapshot()
        };
        self.save(&snapshot)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "state".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path().join("state.json"));
        assert!(state.load().unwrap().is_none());
        assert_eq!(state.load_store().unwrap().themes.len(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let state = StateFile::new(dir.path().join("nested").join("state.json"));
        let store = RootStore::default();

        state.save_store(&store).unwrap();
        assert!(!dir.path().join("nested").join("state.json.tmp").exists());

        let snapshot = state.load().unwrap().unwrap();
        assert_eq!(snapshot.version, CURRENT_VERSION);
        assert!(snapshot.saved_at.is_some());
        assert_eq!(state.load_store().unwrap(), store);
    }

    #[test]
    fn test_snapshot_ignores_ui_block_and_defaults_version() {
        let json = r#"{"themes": [], "ui": {"tab": "editor", "colorspace": "lch"}}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.version, LEGACY_VERSION);
        assert!(snapshot.themes.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let err = StateFile::new(path).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Json(_)));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let state = StateFile::new("/data/huepals.json");
        assert_eq!(state.temp_path(), PathBuf::from("/data/huepals.json.tmp"));
    }
}
