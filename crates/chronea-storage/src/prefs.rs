//! Typed accessors for small user preferences.

use crate::{KeyValueStore, Result};
use chronea_types::ThemeMode;
use tracing::warn;

/// Read the saved theme. Missing, unreadable or unknown values read as dark.
pub fn load_theme<S: KeyValueStore>(store: &S, key: &str) -> ThemeMode {
    match store.get(key) {
        Ok(value) => ThemeMode::from_stored(value.as_deref()),
        Err(err) => {
            warn!("theme preference unreadable, using dark: {}", err);
            ThemeMode::Dark
        }
    }
}

pub fn save_theme<S: KeyValueStore>(store: &S, key: &str, mode: ThemeMode) -> Result<()> {
    store.set(key, mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryStore, StorageError};
    use chronea_types::DEFAULT_THEME_KEY;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StorageError::Unavailable("access denied".to_owned()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Unavailable("access denied".to_owned()))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn theme_roundtrip() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        assert_eq!(load_theme(&store, DEFAULT_THEME_KEY), ThemeMode::Dark);

        save_theme(&store, DEFAULT_THEME_KEY, ThemeMode::Light)?;
        assert_eq!(store.get(DEFAULT_THEME_KEY)?.as_deref(), Some("light"));
        assert_eq!(load_theme(&store, DEFAULT_THEME_KEY), ThemeMode::Light);

        save_theme(&store, DEFAULT_THEME_KEY, ThemeMode::Dark)?;
        assert_eq!(load_theme(&store, DEFAULT_THEME_KEY), ThemeMode::Dark);
        Ok(())
    }

    #[test]
    fn garbage_and_unreadable_fall_back_to_dark() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        store.set(DEFAULT_THEME_KEY, "{not a theme")?;
        assert_eq!(load_theme(&store, DEFAULT_THEME_KEY), ThemeMode::Dark);

        assert_eq!(load_theme(&BrokenStore, DEFAULT_THEME_KEY), ThemeMode::Dark);
        assert!(save_theme(&BrokenStore, DEFAULT_THEME_KEY, ThemeMode::Light).is_err());
        Ok(())
    }
}
