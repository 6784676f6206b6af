use edupro_core::ThemeMode;

/// The presentation mode. Lives outside the session and survives logout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    mode: ThemeMode,
}

impl ThemePreference {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns whether the mode changed.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_mode_reports_change() {
        let mut theme = ThemePreference::default();
        assert!(!theme.set_mode(ThemeMode::Light));
        assert!(theme.set_mode(ThemeMode::Dark));
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle() {
        let mut theme = ThemePreference::new(ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
    }
}
