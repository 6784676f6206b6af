//! Theme configuration.
//!
//! - `THEME_DEFAULT`: mode at process start, `light` (default) or `dark`

use edupro_core::ThemeMode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub default_mode: ThemeMode,
}

impl ThemeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_mode: crate::parse_or(lookup, "THEME_DEFAULT", ThemeMode::Light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        assert_eq!(ThemeConfig::from_lookup(&|_| None).default_mode, ThemeMode::Light);
        let dark = ThemeConfig::from_lookup(&|_| Some("black".into()));
        assert_eq!(dark.default_mode, ThemeMode::Dark);
    }
}
