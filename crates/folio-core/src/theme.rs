//! Color theme preference.
//!
//! The theme is read once at startup and written back on every toggle.
//! Dark is the default and is expressed by the absence of the root
//! `data-theme` attribute; light sets `data-theme="light"`.

use crate::error::{FolioError, FolioResult};
use crate::storage::PreferenceStore;

/// Preference key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Interpret a stored value. Only an exact `"light"` selects light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Strictly parse a stored value.
    pub fn parse(value: &str) -> FolioResult<Self> {
        match value {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(FolioError::InvalidPreference {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Value of the root `data-theme` attribute, `None` when it is removed.
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("light"),
        }
    }

    /// Glyph shown on the theme toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    /// Load the persisted theme, defaulting to dark on a missing or
    /// unreadable value.
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(None) => Theme::default(),
            Ok(Some(value)) => Self::parse(&value).unwrap_or_else(|e| {
                tracing::warn!("{}, using dark", e);
                Theme::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        }
    }

    /// Persist this theme. Failures are logged, never propagated.
    pub fn persist(self, store: &impl PreferenceStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            tracing::warn!(theme = self.as_str(), "Failed to persist theme: {}", e);
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferences;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> FolioResult<Option<String>> {
            Err(FolioError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> FolioResult<()> {
            Err(FolioError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::load(&MemoryPreferences::new()), Theme::Dark);
    }

    #[test]
    fn test_only_light_selects_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_attribute_and_glyph() {
        assert_eq!(Theme::Dark.data_attribute(), None);
        assert_eq!(Theme::Light.data_attribute(), Some("light"));
        assert_eq!(Theme::Dark.glyph(), "🌙");
        assert_eq!(Theme::Light.glyph(), "☀️");
    }

    #[test]
    fn test_persist_then_load() {
        let store = MemoryPreferences::new();
        Theme::Light.persist(&store);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_broken_store_fails_soft() {
        assert_eq!(Theme::load(&BrokenStore), Theme::Dark);
        Theme::Light.persist(&BrokenStore);
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        assert_eq!(Theme::parse("light").unwrap(), Theme::Light);
        assert_eq!(Theme::parse("dark").unwrap(), Theme::Dark);

        let err = Theme::parse("sepia").unwrap_err();
        assert!(matches!(
            err,
            FolioError::InvalidPreference { ref key, ref value } if key == THEME_KEY && value == "sepia"
        ));
    }

    #[test]
    fn test_unknown_stored_value_loads_dark() {
        let store = MemoryPreferences::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }
}
