//! Application-wide session and theme state.
//!
//! Read once at startup, then changed only through the methods below, which
//! write through to storage. Views receive the context instead of reading the
//! storage flags themselves.

use anyhow::Result;
use shared::{LoginRequest, Route, SchedulerConfig, ThemePreference};

use super::session_service::{resolve_route, AuthError, SessionService};
use super::theme_service::ThemeService;
use crate::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub logged_in: bool,
    pub theme: ThemePreference,
    pub config: SchedulerConfig,
}

impl AppContext {
    pub fn init<S: KeyValueStore>(store: &S, os_prefers_dark: bool, config: SchedulerConfig) -> Self {
        let logged_in = SessionService::with_config(store.clone(), config.clone()).is_logged_in();
        let theme = ThemeService::new(store.clone()).initial_theme(os_prefers_dark);

        Self {
            logged_in,
            theme,
            config,
        }
    }

    /// The page shown when `requested` is asked for
    pub fn route_for(&self, requested: Route) -> Route {
        resolve_route(requested, self.logged_in)
    }

    pub fn login<S: KeyValueStore>(&mut self, store: &S, request: &LoginRequest) -> Result<(), AuthError> {
        SessionService::with_config(store.clone(), self.config.clone()).login(request)?;
        self.logged_in = true;
        Ok(())
    }

    pub fn logout<S: KeyValueStore>(&mut self, store: &S) -> Result<(), AuthError> {
        SessionService::with_config(store.clone(), self.config.clone()).logout()?;
        self.logged_in = false;
        Ok(())
    }

    pub fn toggle_theme<S: KeyValueStore>(&mut self, store: &S) -> Result<ThemePreference> {
        self.theme = ThemeService::new(store.clone()).toggle(self.theme)?;
        Ok(self.theme)
    }
}
