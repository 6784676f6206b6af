//! The portal shell: application state plus the screens currently on
//! display.
//!
//! [`Portal`] is the single entry point for user actions. After every action
//! it re-syncs which screens are mounted, so leaving the attendance screen
//! (by navigating, logging out or being refused) always releases the camera.

use edupro_core::{NavigationError, ScreenId, ThemeMode};
use edupro_models::catalog::Major;
use edupro_models::{AvatarError, AvatarUpload, LoginRequest, User};
use edupro_auth::AuthError;
use std::fmt::Write;
use tracing::debug;

use crate::modules::attendance::{AttendanceScreen, CaptureConstraints, CaptureDevice, ScanState};
use crate::modules::exams::ExamsScreen;
use crate::modules::navigation::NavigationService;
use crate::modules::session::SessionService;
use crate::modules::settings::SettingsService;
use crate::modules::{academic, attendance, dashboard, exams, session, settings};
use crate::state::AppState;
use crate::utils::errors::PortalError;
use crate::widgets::{RealTimeClock, notifications};

pub struct Portal<D: CaptureDevice + Clone> {
    state: AppState,
    device: D,
    constraints: CaptureConstraints,
    attendance: Option<AttendanceScreen<D>>,
    exams: Option<ExamsScreen>,
    clock: RealTimeClock,
}

impl<D: CaptureDevice + Clone> Portal<D> {
    /// Build the portal and start its clock. Must be called inside a Tokio
    /// runtime.
    pub fn new(state: AppState, device: D) -> Self {
        let constraints = CaptureConstraints::from(&state.config.camera);
        let clock = RealTimeClock::start(&state.config.clock);
        Self {
            state,
            device,
            constraints,
            attendance: None,
            exams: None,
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn clock(&self) -> &RealTimeClock {
        &self.clock
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.session.current_user()
    }

    pub fn active_screen(&self) -> ScreenId {
        self.state.navigation.active()
    }

    pub fn attendance(&self) -> Option<&AttendanceScreen<D>> {
        self.attendance.as_ref()
    }

    pub fn exams(&self) -> Option<&ExamsScreen> {
        self.exams.as_ref()
    }

    pub fn login(&mut self, request: &LoginRequest) -> Result<User, AuthError> {
        let result = SessionService::login(&mut self.state, request);
        self.sync_mounts();
        result
    }

    pub fn logout(&mut self) {
        SessionService::logout(&mut self.state);
        self.sync_mounts();
    }

    pub fn navigate(&mut self, screen: ScreenId) -> Result<(), NavigationError> {
        let result = NavigationService::set_active_screen(&mut self.state, screen);
        self.sync_mounts();
        result
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        SettingsService::set_theme(&mut self.state, mode);
    }

    pub fn upload_avatar(&mut self, upload: &AvatarUpload) -> Result<(), AvatarError> {
        SettingsService::upload_avatar(&mut self.state, upload)
    }

    /// Toggle the scanner on the attendance screen.
    pub async fn toggle_scan(&mut self) -> Result<&ScanState, PortalError> {
        let screen = self
            .attendance
            .as_mut()
            .ok_or_else(|| PortalError::screen_not_open(ScreenId::Attendance))?;
        screen.toggle_scan().await;
        Ok(screen.controller().state())
    }

    /// Select the exam programme of the major with `code`.
    pub fn select_major(&mut self, code: &str) -> Result<&'static Major, PortalError> {
        let screen = self
            .exams
            .as_mut()
            .ok_or_else(|| PortalError::screen_not_open(ScreenId::Exams))?;
        screen
            .select_code(code)
            .ok_or_else(|| PortalError::not_found(anyhow::anyhow!("unknown major code: {code}")))
    }

    /// Mount the screen that is active and unmount the ones that are not.
    fn sync_mounts(&mut self) {
        let active = self.state.session.is_authenticated().then(|| self.active_screen());

        match (active == Some(ScreenId::Attendance), self.attendance.is_some()) {
            (true, false) => {
                self.attendance = Some(AttendanceScreen::mount(
                    self.device.clone(),
                    self.constraints.clone(),
                ));
            }
            (false, true) => {
                if let Some(screen) = self.attendance.take() {
                    screen.unmount();
                }
            }
            _ => {}
        }

        match (active == Some(ScreenId::Exams), self.exams.is_some()) {
            (true, false) => self.exams = Some(ExamsScreen::default()),
            (false, true) => self.exams = None,
            _ => {}
        }

        debug!(
            active = ?active,
            attendance = self.attendance.is_some(),
            exams = self.exams.is_some(),
            "Screens synced"
        );
    }

    /// Render the whole frame: header, menu and the active screen.
    pub fn render(&self) -> String {
        let theme = self.state.theme.mode();
        let Some(user) = self.current_user() else {
            return session::view::render_sign_in(theme);
        };

        let active = self.active_screen();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "EduPro · {} ({}) · {} mode",
            user.name,
            user.role.as_str(),
            theme.as_str()
        );

        let menu: Vec<String> = self
            .state
            .navigation
            .menu()
            .iter()
            .map(|screen| {
                if *screen == active {
                    format!("[{}]", screen.label())
                } else {
                    screen.label().to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}", menu.join("  "));
        let _ = writeln!(out, "{}", "─".repeat(48));

        let body = match active {
            ScreenId::Home => dashboard::view::render(user, &self.clock),
            ScreenId::Academic => academic::view::render(user),
            ScreenId::Attendance => match &self.attendance {
                Some(screen) => attendance::view::render(screen.controller()),
                None => String::new(),
            },
            ScreenId::Exams => match &self.exams {
                Some(screen) => exams::view::render(screen),
                None => String::new(),
            },
            ScreenId::Settings => settings::view::render(user, theme),
        };
        out.push_str(&body);
        out
    }

    pub fn render_notifications(&self) -> String {
        notifications::render()
    }
}
