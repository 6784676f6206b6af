use edupro_auth::{AuthError, verify_credentials};
use edupro_models::{AvatarRef, LoginRequest, User};
use edupro_observability::{track_avatar_updated, track_login_failure, track_login_success, track_logout};
use tracing::{debug, info, instrument, warn};

use crate::state::AppState;

pub struct SessionService;

impl SessionService {
    /// Validate `request`, bind the resulting user and open the role's menu
    /// on the home screen.
    ///
    /// A failed attempt leaves the session exactly as it was.
    #[instrument(skip(state), fields(authenticator = state.authenticator.name()))]
    pub fn login(state: &mut AppState, request: &LoginRequest) -> Result<User, AuthError> {
        let user = match verify_credentials(state.authenticator.as_ref(), request) {
            Ok(user) => user,
            Err(e) => {
                warn!(reason = e.reason(), "Login rejected");
                track_login_failure(e.reason());
                return Err(e);
            }
        };

        if let Some(previous) = state.session.current_user() {
            debug!(previous = %previous.username, "Replacing signed-in user");
        }

        state.session.bind(user.clone());
        state.navigation.reset_for(Some(user.role));

        info!(user_id = %user.id, role = %user.role, "User signed in");
        track_login_success(user.role.as_str());

        Ok(user)
    }

    /// Clear the session and return to the home screen. The theme survives.
    /// Calling this while logged out does nothing.
    #[instrument(skip(state))]
    pub fn logout(state: &mut AppState) {
        let Some(user) = state.session.clear() else {
            debug!("Logout requested without a session");
            return;
        };

        state.navigation.reset_for(None);

        info!(user_id = %user.id, "User signed out");
        track_logout();
    }

    /// Replace the signed-in user's avatar. Does nothing while logged out.
    #[instrument(skip(state))]
    pub fn update_avatar(state: &mut AppState, avatar: AvatarRef) {
        let Some(user) = state.session.current_user_mut() else {
            debug!("Avatar update ignored without a session");
            return;
        };

        user.avatar = avatar;
        info!(user_id = %user.id, "Avatar updated");
        track_avatar_updated();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_config::PortalConfig;
    use edupro_core::{ScreenId, ThemeMode, UserRole};

    fn state() -> AppState {
        AppState::new(PortalConfig::default())
    }

    #[test]
    fn test_login_binds_demo_student() {
        let mut state = state();
        let user = SessionService::login(&mut state, &LoginRequest::new("bagus123", "pw")).unwrap();

        assert_eq!(user.name, "Bagus Prayoga");
        assert_eq!(state.session.role(), Some(UserRole::Student));
        assert_eq!(state.navigation.active(), ScreenId::Home);
        assert_eq!(state.navigation.menu().len(), 5);
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let mut state = state();
        let err = SessionService::login(&mut state, &LoginRequest::new("", "pw")).unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_logout_resets_navigation_and_keeps_theme() {
        let mut state = state();
        SessionService::login(&mut state, &LoginRequest::new("bagus123", "pw")).unwrap();
        state.theme.set_mode(ThemeMode::Dark);

        SessionService::logout(&mut state);

        assert!(state.session.current_user().is_none());
        assert_eq!(state.navigation.active(), ScreenId::Home);
        assert!(state.navigation.menu().is_empty());
        assert_eq!(state.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_logout_twice_is_noop() {
        let mut state = state();
        SessionService::logout(&mut state);
        SessionService::logout(&mut state);
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_update_avatar() {
        let mut state = state();
        SessionService::update_avatar(&mut state, AvatarRef::url("https://x/ignored.png"));
        assert!(state.session.current_user().is_none());

        SessionService::login(&mut state, &LoginRequest::new("bagus123", "pw")).unwrap();
        SessionService::update_avatar(&mut state, AvatarRef::url("https://x/new.png"));
        assert_eq!(
            state.session.current_user().unwrap().avatar.as_str(),
            "https://x/new.png"
        );
    }
}
