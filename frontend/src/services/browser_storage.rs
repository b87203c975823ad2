//! `localStorage` adapter for the backend repositories.

use anyhow::{anyhow, Result};
use backend::KeyValueStore;
use gloo::storage::{LocalStorage, Storage};

/// Key-value store backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| anyhow!("localStorage read of '{}' failed: {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage write of '{}' failed: {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| anyhow!("localStorage delete of '{}' failed: {:?}", key, e))
    }
}
