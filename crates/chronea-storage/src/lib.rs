//! Key/value persistence medium shared by the site state.
//!
//! The browser build plugs `localStorage` in behind [`KeyValueStore`];
//! everything else (tests, tooling) uses [`InMemoryStore`].

pub mod prefs;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("quota exceeded writing {len} bytes to '{key}'")]
    QuotaExceeded { key: String, len: usize },
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed, string-valued store. Single-threaded; callers issue one
/// operation at a time.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Map-backed store. With a quota it rejects writes the way a browser does
/// once its storage budget is spent.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes currently held, counting keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self
                .entries
                .borrow()
                .get(key)
                .map(|old| key.len() + old.len())
                .unwrap_or(0);
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > quota {
                debug!("rejecting write to '{}': {} > {} bytes", key, projected, quota);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    len: value.len(),
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() -> anyhow::Result<()> {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k")?, None);

        store.set("k", "v1")?;
        store.set("k", "v2")?;
        assert_eq!(store.get("k")?.as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove("k")?;
        assert!(store.is_empty());
        // removing twice is fine
        store.remove("k")?;
        Ok(())
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_old_value() -> anyhow::Result<()> {
        let store = InMemoryStore::with_quota(8);
        store.set("k", "12345")?;

        let err = store.set("k", "123456789").unwrap_err();
        assert_eq!(
            err,
            StorageError::QuotaExceeded {
                key: "k".to_owned(),
                len: 9
            }
        );
        assert_eq!(store.get("k")?.as_deref(), Some("12345"));

        // the replaced value does not count against the new one
        store.set("k", "1234567")?;
        assert_eq!(store.used_bytes(), 8);
        Ok(())
    }

    #[test]
    fn shared_handles_see_the_same_entries() -> anyhow::Result<()> {
        let store = Rc::new(InMemoryStore::new());
        let a = Rc::clone(&store);
        let b = &*store;

        a.set("theme", "light")?;
        assert_eq!(b.get("theme")?.as_deref(), Some("light"));
        Ok(())
    }
}
