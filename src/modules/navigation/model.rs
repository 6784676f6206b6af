use edupro_core::{ScreenId, UserRole, visible_menu};

/// Active screen plus the menu it must belong to.
///
/// The menu is looked up once per role change and cached. While logged out
/// the menu is empty and the active screen rests on [`ScreenId::Home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: ScreenId,
    menu: &'static [ScreenId],
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: ScreenId::Home,
            menu: &[],
        }
    }
}

impl NavigationState {
    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Screens the signed-in role may open, in rendering order.
    pub fn menu(&self) -> &'static [ScreenId] {
        self.menu
    }

    pub fn permits(&self, screen: ScreenId) -> bool {
        self.menu.contains(&screen)
    }

    /// Recompute the menu for `role`. If the active screen dropped out of the
    /// menu, fall back to home. Returns whether that happened.
    pub(crate) fn apply_role(&mut self, role: Option<UserRole>) -> bool {
        self.menu = role.map(visible_menu).unwrap_or(&[]);

        if self.active != ScreenId::Home && !self.permits(self.active) {
            self.active = ScreenId::Home;
            return true;
        }
        false
    }

    /// Recompute the menu for `role` and go home.
    pub(crate) fn reset_for(&mut self, role: Option<UserRole>) {
        self.apply_role(role);
        self.active = ScreenId::Home;
    }

    pub(crate) fn show(&mut self, screen: ScreenId) {
        self.active = screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home_with_empty_menu() {
        let nav = NavigationState::default();
        assert_eq!(nav.active(), ScreenId::Home);
        assert!(nav.menu().is_empty());
        assert!(!nav.permits(ScreenId::Home));
    }

    #[test]
    fn test_role_change_clamps_active_screen() {
        let mut nav = NavigationState::default();
        nav.reset_for(Some(UserRole::Teacher));
        nav.show(ScreenId::Attendance);

        assert!(nav.apply_role(Some(UserRole::Admin)));
        assert_eq!(nav.active(), ScreenId::Home);
        assert_eq!(nav.menu(), &[ScreenId::Home, ScreenId::Settings]);
    }

    #[test]
    fn test_role_change_keeps_shared_screen() {
        let mut nav = NavigationState::default();
        nav.reset_for(Some(UserRole::Student));
        nav.show(ScreenId::Settings);

        assert!(!nav.apply_role(Some(UserRole::Admin)));
        assert_eq!(nav.active(), ScreenId::Settings);
    }

    #[test]
    fn test_reset_goes_home() {
        let mut nav = NavigationState::default();
        nav.reset_for(Some(UserRole::Student));
        nav.show(ScreenId::Exams);
        nav.reset_for(Some(UserRole::Student));
        assert_eq!(nav.active(), ScreenId::Home);
    }
}
