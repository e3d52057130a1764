//! Browser LocalStorage backend

use anyhow::{Result, anyhow};

use super::KeyValueStore;

/// Store backed by `window.localStorage`, values kept as decimal strings
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Grab the page's LocalStorage, if the browser exposes one
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }
        storage.map(|storage| Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<i64> {
        let raw = self.storage.get_item(key).ok().flatten()?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring non-integer LocalStorage value for {}: {:?}", key, raw);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: i64) -> Result<()> {
        self.storage
            .set_item(key, &value.to_string())
            .map_err(|e| anyhow!("LocalStorage write for {} failed: {:?}", key, e))
    }
}
