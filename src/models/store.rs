use super::theme::Theme;
use crate::error::{PersistenceError, StoreError};
use crate::services::migration;
use crate::services::persistence::{Snapshot, CURRENT_VERSION};

/// Root of all persisted state
///
/// Constructed explicitly and handed to whichever layer needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct RootStore {
    pub version: String,
    pub themes: Vec<Theme>,
}

impl RootStore {
    /// An empty store at the current version
    pub fn new() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            themes: Vec::new(),
        }
    }

    /// Append a theme, returning its id
    pub fn add_theme(&mut self, theme: Theme) -> String {
        let id = theme.id.clone();
        self.themes.push(theme);
        id
    }

    pub fn remove_theme(&mut self, id: &str) -> Result<Theme, StoreError> {
        let index = self
            .themes
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::ThemeNotFound(id.to_string()))?;
        Ok(self.themes.remove(index))
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn theme_mut(&mut self, id: &str) -> Option<&mut Theme> {
        self.themes.iter_mut().find(|t| t.id == id)
    }

    /// Look up a theme by id, then by name (first match)
    pub fn find_theme(&self, selector: &str) -> Result<&Theme, StoreError> {
        self.theme(selector)
            .or_else(|| self.themes.iter().find(|t| t.matches(selector)))
            .ok_or_else(|| StoreError::ThemeNotFound(selector.to_string()))
    }

    pub fn find_theme_mut(&mut self, selector: &str) -> Result<&mut Theme, StoreError> {
        let id = self.find_theme(selector)?.id.clone();
        self.theme_mut(&id)
            .ok_or_else(|| StoreError::ThemeNotFound(selector.to_string()))
    }

    /// Back to one default theme holding one default color
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            version: CURRENT_VERSION.to_string(),
            themes: self.themes.clone(),
            saved_at: None,
        }
    }

    /// Rebuild the store from a snapshot, converting legacy HSL data
    ///
    /// Out-of-range values in each theme are repaired; see [`Theme::repair`].
    pub fn from_snapshot(mut snapshot: Snapshot) -> Result<Self, PersistenceError> {
        if migration::needs_migration(&snapshot)? {
            migration::migrate(&mut snapshot)?;
        }
        for theme in &mut snapshot.themes {
            theme.repair();
        }
        Ok(Self {
            version: CURRENT_VERSION.to_string(),
            themes: snapshot.themes,
        })
    }
}

impl Default for RootStore {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            themes: vec![Theme::default()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_has_one_theme_with_one_color() {
        let store = RootStore::default();

        assert_eq!(store.version, "2.0");
        assert_eq!(store.themes.len(), 1);
        assert_eq!(store.themes[0].colors.len(), 1);
    }

    #[test]
    fn test_add_find_remove_theme() {
        let mut store = RootStore::new();
        let id = store.add_theme(Theme::new("Ocean"));

        assert_eq!(store.find_theme("Ocean").unwrap().id, id);
        assert_eq!(store.find_theme(&id).unwrap().name, "Ocean");

        store.find_theme_mut("Ocean").unwrap().toggle_favorite();
        assert!(store.theme(&id).unwrap().favorite);

        let removed = store.remove_theme(&id).unwrap();
        assert_eq!(removed.name, "Ocean");
        assert!(matches!(
            store.find_theme("Ocean"),
            Err(StoreError::ThemeNotFound(_))
        ));
        assert!(store.remove_theme(&id).is_err());
    }

    #[test]
    fn test_reset() {
        let mut store = RootStore::new();
        store.add_theme(Theme::new("A"));
        store.add_theme(Theme::new("B"));

        store.reset();

        assert_eq!(store.themes.len(), 1);
        assert_eq!(store.themes[0].name, "New Theme");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = RootStore::new();
        store.add_theme(Theme::new("Ocean"));

        let snapshot = store.to_snapshot();
        assert_eq!(snapshot.version, CURRENT_VERSION);

        let restored = RootStore::from_snapshot(snapshot).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_from_snapshot_rejects_unknown_version() {
        let snapshot = Snapshot {
            version: "0.9".to_string(),
            themes: Vec::new(),
            saved_at: None,
        };
        assert!(matches!(
            RootStore::from_snapshot(snapshot),
            Err(PersistenceError::UnsupportedVersion(v)) if v == "0.9"
        ));
    }
}
