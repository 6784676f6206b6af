mod common;

use common::{login_as, test_portal, test_state};
use edupro::modules::navigation::{NavigationService, NavigationState};
use edupro::modules::session::{Session, SessionService};
use edupro::modules::settings::SettingsService;
use edupro_auth::AuthError;
use edupro_core::{NavigationError, ScreenId, ThemeMode, UserRole};
use edupro_models::{AvatarRef, LoginRequest};
use fake::Fake;
use fake::faker::internet::en::Password;

#[tokio::test]
async fn test_student_walkthrough() {
    let mut portal = test_portal();

    let password: String = Password(8..16).fake();
    let user = portal.login(&LoginRequest::new("bagus123", password)).unwrap();
    assert_eq!(user.name, "Bagus Prayoga");
    assert_eq!(portal.active_screen(), ScreenId::Home);

    portal.navigate(ScreenId::Attendance).unwrap();
    assert_eq!(portal.active_screen(), ScreenId::Attendance);

    portal.logout();
    assert!(portal.current_user().is_none());
    assert_eq!(portal.active_screen(), ScreenId::Home);
}

#[test]
fn test_login_logout_round_trip() {
    let mut state = test_state();
    for username in ["bagus123", "anita_teacher", "admin"] {
        let user = SessionService::login(&mut state, &LoginRequest::new(username, "pw")).unwrap();
        assert_eq!(state.session.current_user(), Some(&user));
        NavigationService::set_active_screen(&mut state, ScreenId::Settings).unwrap();

        SessionService::logout(&mut state);
        assert_eq!(state.session, Session::default());
        assert_eq!(state.navigation, NavigationState::default());
    }
}

#[test]
fn test_empty_fields_rejected() {
    let mut state = test_state();

    let err = SessionService::login(&mut state, &LoginRequest::new("", "")).unwrap_err();
    assert_eq!(
        err,
        AuthError::Validation("password is required, username is required".into())
    );

    let err = SessionService::login(&mut state, &LoginRequest::new("ghost", "pw")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!state.session.is_authenticated());
}

#[test]
fn test_update_avatar_when_logged_out_is_noop() {
    let mut state = test_state();
    SessionService::update_avatar(&mut state, AvatarRef::url("https://x/a.png"));
    assert!(state.session.current_user().is_none());
}

#[test]
fn test_theme_survives_logout() {
    let mut state = test_state();
    SessionService::login(&mut state, &LoginRequest::new("bagus123", "pw")).unwrap();
    SettingsService::set_theme(&mut state, ThemeMode::Dark);
    SessionService::logout(&mut state);
    assert_eq!(state.theme.mode(), ThemeMode::Dark);

    SessionService::login(&mut state, &LoginRequest::new("admin", "pw")).unwrap();
    assert_eq!(state.theme.mode(), ThemeMode::Dark);
}

#[test]
fn test_navigation_refused_while_logged_out() {
    let mut state = test_state();
    let err = NavigationService::set_active_screen(&mut state, ScreenId::Settings).unwrap_err();
    assert_eq!(
        err,
        NavigationError::ScreenNotPermitted {
            screen: ScreenId::Settings,
            role: None,
        }
    );
}

#[tokio::test]
async fn test_admin_refused_exams_lands_home() {
    let mut portal = test_portal();
    login_as(&mut portal, "admin");
    portal.navigate(ScreenId::Settings).unwrap();

    let err = portal.navigate(ScreenId::Exams).unwrap_err();
    assert_eq!(
        err,
        NavigationError::ScreenNotPermitted {
            screen: ScreenId::Exams,
            role: Some(UserRole::Admin),
        }
    );
    assert_eq!(portal.active_screen(), ScreenId::Home);
    assert!(portal.exams().is_none());
}
