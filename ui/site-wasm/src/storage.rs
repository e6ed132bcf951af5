//! `localStorage` behind the shared `KeyValueStore` seam.

use chronea_storage::{KeyValueStore, Result, StorageError};
use wasm_bindgen::{JsCast, JsValue};

/// Handle over the page's `localStorage`. The storage object is looked up on
/// every call, so a store that becomes unavailable mid-session reports that
/// instead of panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| classify_write_error(key, value, &e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(describe(&e)))
    }
}

fn classify_write_error(key: &str, value: &str, err: &JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StorageError::QuotaExceeded {
            key: key.to_owned(),
            len: value.len(),
        },
        _ => StorageError::Backend(describe(err)),
    }
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) => format!("{}: {}", ex.name(), ex.message()),
        None => format!("{:?}", err),
    }
}
