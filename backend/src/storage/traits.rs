//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer run
//! against the browser's localStorage or an in-memory map interchangeably.

use anyhow::Result;

/// A synchronous string key-value store
///
/// Mirrors the shape of the Web Storage API. Implementations are cheap handles
/// that can be cloned into every repository that needs them.
pub trait KeyValueStore: Clone {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
