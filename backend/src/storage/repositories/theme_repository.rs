use anyhow::Result;
use log::warn;
use shared::{storage_keys, ThemePreference};

use crate::storage::traits::KeyValueStore;

/// Repository for the colour scheme preference
#[derive(Clone, Debug)]
pub struct ThemeRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemeRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored preference, `None` when unset or unrecognised
    pub fn load(&self) -> Option<ThemePreference> {
        match self.store.get_item(storage_keys::THEME) {
            Ok(Some(value)) => ThemePreference::parse(&value),
            Ok(None) => None,
            Err(e) => {
                warn!("⚠️ Could not read theme preference: {}", e);
                None
            }
        }
    }

    pub fn save(&self, theme: ThemePreference) -> Result<()> {
        self.store.set_item(storage_keys::THEME, theme.as_str())
    }
}
