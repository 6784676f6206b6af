use edupro_core::ThemeMode;
use edupro_models::{AvatarError, AvatarRef, AvatarUpload};
use edupro_observability::track_theme_changed;
use tracing::{debug, info, instrument, warn};

use crate::modules::session::SessionService;
use crate::state::AppState;

pub struct SettingsService;

impl SettingsService {
    #[instrument(skip(state))]
    pub fn set_theme(state: &mut AppState, mode: ThemeMode) {
        if state.theme.set_mode(mode) {
            info!(mode = mode.as_str(), "Theme changed");
            track_theme_changed(mode.as_str());
        } else {
            debug!(mode = mode.as_str(), "Theme unchanged");
        }
    }

    pub fn toggle_theme(state: &mut AppState) -> ThemeMode {
        let mode = state.theme.mode().toggled();
        Self::set_theme(state, mode);
        mode
    }

    /// Check `upload` against the avatar policy and make it the signed-in
    /// user's avatar.
    #[instrument(skip(state))]
    pub fn upload_avatar(state: &mut AppState, upload: &AvatarUpload) -> Result<(), AvatarError> {
        let avatar = AvatarRef::from_upload(upload, &state.config.avatar).inspect_err(|e| {
            warn!(error = %e, "Avatar upload rejected");
        })?;
        SessionService::update_avatar(state, avatar);
        Ok(())
    }
}
