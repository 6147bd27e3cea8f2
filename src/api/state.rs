//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{Settings, SettingsLoader};

/// Shared application state.
///
/// Holds the settings snapshot loaded at startup. Individual requests
/// may override it per call; the snapshot itself is never mutated.
#[derive(Clone)]
pub struct AppState {
    /// The loaded settings.
    settings: Arc<SettingsLoader>,
}

impl AppState {
    /// Creates a new application state with the given settings loader.
    pub fn new(settings: SettingsLoader) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the startup settings snapshot.
    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SettingsLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_settings() {
        let state = AppState::default();
        assert_eq!(state.settings(), &Settings::default());
    }
}
