use edupro_auth::{Authenticator, authenticator_for};
use edupro_config::PortalConfig;
use std::fmt;
use std::sync::Arc;

use crate::modules::navigation::model::NavigationState;
use crate::modules::session::model::Session;
use crate::modules::settings::model::ThemePreference;

/// Everything the portal knows about the current visit.
///
/// Starts logged out, on [`ScreenId::Home`](edupro_core::ScreenId::Home),
/// with the configured default theme. Only the services in
/// [`crate::modules`] mutate it.
#[derive(Clone)]
pub struct AppState {
    pub session: Session,
    pub navigation: NavigationState,
    pub theme: ThemePreference,
    pub authenticator: Arc<dyn Authenticator>,
    pub config: PortalConfig,
}

impl AppState {
    pub fn new(config: PortalConfig) -> Self {
        let authenticator = authenticator_for(&config.auth);
        Self::with_authenticator(config, authenticator)
    }

    pub fn with_authenticator(config: PortalConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            session: Session::default(),
            navigation: NavigationState::default(),
            theme: ThemePreference::new(config.theme.default_mode),
            authenticator,
            config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("session", &self.session)
            .field("navigation", &self.navigation)
            .field("theme", &self.theme)
            .field("authenticator", &self.authenticator.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_core::{ScreenId, ThemeMode};

    #[test]
    fn test_initial_state_is_logged_out_on_home() {
        let state = AppState::new(PortalConfig::default());
        assert!(!state.session.is_authenticated());
        assert_eq!(state.navigation.active(), ScreenId::Home);
        assert!(state.navigation.menu().is_empty());
        assert_eq!(state.theme.mode(), ThemeMode::Light);
        assert_eq!(state.authenticator.name(), "demo");
    }

    #[test]
    fn test_default_theme_from_config() {
        let mut config = PortalConfig::default();
        config.theme.default_mode = ThemeMode::Dark;
        let state = AppState::new(config);
        assert_eq!(state.theme.mode(), ThemeMode::Dark);
    }
}
