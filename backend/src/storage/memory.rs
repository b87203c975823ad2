use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a store handed to several
/// repositories behaves like a single browser storage area.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .try_borrow()
            .map_err(|e| anyhow!("memory store is busy: {}", e))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|e| anyhow!("memory store is busy: {}", e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|e| anyhow!("memory store is busy: {}", e))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("theme").unwrap(), None);

        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").unwrap(), Some("dark".to_string()));

        store.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap(), Some("light".to_string()));

        store.remove_item("theme").unwrap();
        assert_eq!(store.get_item("theme").unwrap(), None);
        store.remove_item("theme").unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        handle.set_item("isLoggedIn", "true").unwrap();
        assert_eq!(store.get_item("isLoggedIn").unwrap(), Some("true".to_string()));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
