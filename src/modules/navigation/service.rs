use edupro_core::{NavigationError, ScreenId};
use edupro_observability::{track_navigation_denied, track_screen_view};
use tracing::{debug, instrument, warn};

use crate::state::AppState;

pub struct NavigationService;

impl NavigationService {
    /// Make `screen` the active screen.
    ///
    /// A screen outside the signed-in role's menu (or any screen while logged
    /// out) is refused: the active screen falls back to home and
    /// [`NavigationError::ScreenNotPermitted`] is returned.
    #[instrument(skip(state), fields(role = ?state.session.role()))]
    pub fn set_active_screen(state: &mut AppState, screen: ScreenId) -> Result<(), NavigationError> {
        if state.session.is_authenticated() && state.navigation.permits(screen) {
            debug!(screen = screen.slug(), "Screen opened");
            state.navigation.show(screen);
            track_screen_view(screen.slug());
            return Ok(());
        }

        let role = state.session.role();
        warn!(screen = screen.slug(), "Navigation refused");
        state.navigation.show(ScreenId::Home);
        track_navigation_denied(screen.slug());

        Err(NavigationError::ScreenNotPermitted { screen, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::session::SessionService;
    use edupro_config::{AuthMode, PortalConfig};
    use edupro_core::UserRole;
    use edupro_models::LoginRequest;

    fn signed_in(username: &str) -> AppState {
        let mut config = PortalConfig::default();
        config.auth.mode = AuthMode::Directory;
        let mut state = AppState::new(config);
        SessionService::login(&mut state, &LoginRequest::new(username, "pw")).unwrap();
        state
    }

    #[test]
    fn test_student_opens_every_menu_screen() {
        let mut state = signed_in("bagus123");
        for screen in ScreenId::ALL {
            NavigationService::set_active_screen(&mut state, screen).unwrap();
            assert_eq!(state.navigation.active(), screen);
        }
    }

    #[test]
    fn test_admin_refused_attendance_and_clamped_home() {
        let mut state = signed_in("admin");
        NavigationService::set_active_screen(&mut state, ScreenId::Settings).unwrap();

        let err = NavigationService::set_active_screen(&mut state, ScreenId::Attendance).unwrap_err();
        assert_eq!(
            err,
            NavigationError::ScreenNotPermitted {
                screen: ScreenId::Attendance,
                role: Some(UserRole::Admin),
            }
        );
        assert_eq!(state.navigation.active(), ScreenId::Home);
    }

    #[test]
    fn test_logged_out_navigation_refused() {
        let mut state = AppState::new(PortalConfig::default());
        let err = NavigationService::set_active_screen(&mut state, ScreenId::Home).unwrap_err();
        assert_eq!(
            err,
            NavigationError::ScreenNotPermitted {
                screen: ScreenId::Home,
                role: None,
            }
        );
        assert_eq!(state.navigation.active(), ScreenId::Home);
    }
}
