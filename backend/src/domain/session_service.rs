//! Staff session handling.
//!
//! There is no real identity model: a single hardcoded staff credential
//! unlocks the calendar and a flag in storage remembers it.

use log::{info, warn};
use shared::{LoginRequest, Route, SchedulerConfig};
use thiserror::Error;

use crate::storage::{KeyValueStore, SessionRepository};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct SessionService<S: KeyValueStore> {
    repository: SessionRepository<S>,
    config: SchedulerConfig,
}

impl<S: KeyValueStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SchedulerConfig::default())
    }

    pub fn with_config(store: S, config: SchedulerConfig) -> Self {
        Self {
            repository: SessionRepository::new(store),
            config,
        }
    }

    /// Check the credentials and remember the session on success
    pub fn login(&self, request: &LoginRequest) -> Result<(), AuthError> {
        if request.email != self.config.staff_email || request.password != self.config.staff_password {
            warn!("🔒 Rejected login attempt for '{}'", request.email);
            return Err(AuthError::InvalidCredentials);
        }

        self.repository.set_logged_in()?;
        info!("🔓 Staff member signed in");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.repository.clear()?;
        info!("👋 Staff member signed out");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.repository.is_logged_in()
    }

    /// The page actually shown for `requested`
    pub fn resolve_route(&self, requested: Route) -> Route {
        resolve_route(requested, self.is_logged_in())
    }
}

/// Route guard: the calendar is only reachable while signed in
pub fn resolve_route(requested: Route, logged_in: bool) -> Route {
    match requested {
        Route::Calendar if logged_in => Route::Calendar,
        _ => Route::Login,
    }
}
