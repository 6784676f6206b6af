use edupro::modules::attendance::SimulatedCamera;
use edupro::portal::Portal;
use edupro::state::AppState;
use edupro_config::{AuthMode, PortalConfig};
use edupro_models::LoginRequest;

/// Config with the directory authenticator, so each demo account binds as
/// itself.
#[allow(dead_code)]
pub fn directory_config() -> PortalConfig {
    let mut config = PortalConfig::default();
    config.auth.mode = AuthMode::Directory;
    config
}

#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::new(directory_config())
}

/// Portal backed by a camera that grants immediately.
#[allow(dead_code)]
pub fn test_portal() -> Portal<SimulatedCamera> {
    Portal::new(test_state(), SimulatedCamera::instant())
}

#[allow(dead_code)]
pub fn login_as(portal: &mut Portal<SimulatedCamera>, username: &str) {
    portal
        .login(&LoginRequest::new(username, "password"))
        .unwrap_or_else(|e| panic!("login as {username} failed: {e}"));
}
