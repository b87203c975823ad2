use anyhow::Result;
use log::warn;
use shared::storage_keys;

use crate::storage::traits::KeyValueStore;

const LOGGED_IN: &str = "true";

/// Repository for the signed-in flag
#[derive(Clone, Debug)]
pub struct SessionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the flag is set; an unreadable store counts as signed out
    pub fn is_logged_in(&self) -> bool {
        match self.store.get_item(storage_keys::IS_LOGGED_IN) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN),
            Err(e) => {
                warn!("⚠️ Could not read session flag: {}", e);
                false
            }
        }
    }

    pub fn set_logged_in(&self) -> Result<()> {
        self.store.set_item(storage_keys::IS_LOGGED_IN, LOGGED_IN)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(storage_keys::IS_LOGGED_IN)
    }
}
