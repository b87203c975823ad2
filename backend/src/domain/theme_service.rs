use anyhow::Result;
use log::info;
use shared::ThemePreference;

use crate::storage::{KeyValueStore, ThemeRepository};

/// Reads and toggles the dark/light preference
#[derive(Clone, Debug)]
pub struct ThemeService<S: KeyValueStore> {
    repository: ThemeRepository<S>,
}

impl<S: KeyValueStore> ThemeService<S> {
    pub fn new(store: S) -> Self {
        Self {
            repository: ThemeRepository::new(store),
        }
    }

    /// The stored preference, or the OS colour scheme when nothing is stored
    pub fn initial_theme(&self, os_prefers_dark: bool) -> ThemePreference {
        self.repository.load().unwrap_or(if os_prefers_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        })
    }

    /// Flip `current`, persist it and return the new preference
    pub fn toggle(&self, current: ThemePreference) -> Result<ThemePreference> {
        let next = current.toggled();
        self.repository.save(next)?;
        info!("🎨 Theme switched to {}", next);
        Ok(next)
    }
}
