//! # EduPro Config
//!
//! Configuration types for the EduPro portal.
//!
//! Every structure is loaded from environment variables and falls back to a
//! sensible default when a variable is missing or cannot be parsed:
//!
//! - [`auth`]: which authenticator binds users at login
//! - [`avatar`]: accepted avatar uploads
//! - [`camera`]: capture constraints and the simulated device
//! - [`clock`]: real-time clock widget
//! - [`logging`]: console and file logging
//! - [`theme`]: initial presentation mode
//!
//! Each `from_env()` has a `from_lookup()` twin that takes the variable
//! source as a closure, so tests never touch the process environment.
//!
//! # Example
//!
//! ```ignore
//! use edupro_config::PortalConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = PortalConfig::from_env();
//! println!("camera: {}x{}", config.camera.ideal_width, config.camera.ideal_height);
//! ```

use std::str::FromStr;

pub mod auth;
pub mod avatar;
pub mod camera;
pub mod clock;
pub mod logging;
pub mod theme;

// Re-export commonly used types at crate root
pub use auth::{AuthConfig, AuthMode};
pub use avatar::AvatarConfig;
pub use camera::{CameraConfig, CameraSimulation, FacingMode};
pub use clock::ClockConfig;
pub use logging::LoggingConfig;
pub use theme::ThemeConfig;

/// All portal configuration, loaded at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortalConfig {
    pub auth: AuthConfig,
    pub avatar: AvatarConfig,
    pub camera: CameraConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
    pub theme: ThemeConfig,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            auth: AuthConfig::from_lookup(&lookup),
            avatar: AvatarConfig::from_lookup(&lookup),
            camera: CameraConfig::from_lookup(&lookup),
            clock: ClockConfig::from_lookup(&lookup),
            logging: LoggingConfig::from_lookup(&lookup),
            theme: ThemeConfig::from_lookup(&lookup),
        }
    }
}

/// Parse `key` from `lookup`, falling back to `default` when the variable is
/// absent or malformed.
pub(crate) fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let config = PortalConfig::from_lookup(|_| None);
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_overrides_reach_every_section() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            ("AUTH_MODE", "directory"),
            ("CAMERA_IDEAL_WIDTH", "640"),
            ("THEME_DEFAULT", "dark"),
            ("LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.auth.mode, AuthMode::Directory);
        assert_eq!(config.camera.ideal_width, 640);
        assert_eq!(config.theme.default_mode, edupro_core::ThemeMode::Dark);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_or_ignores_garbage() {
        let lookup = lookup_from(&[("N", "not-a-number")]);
        assert_eq!(parse_or(&lookup, "N", 7u32), 7);
        assert_eq!(parse_or(&lookup, "MISSING", 3u32), 3);
    }
}
