//! Presentation theme modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process-wide presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Page background colour.
    pub const fn background_hex(self) -> &'static str {
        match self {
            ThemeMode::Light => "#f8fafc",
            ThemeMode::Dark => "#000000",
        }
    }

    /// Card surface colour.
    pub const fn surface_hex(self) -> &'static str {
        match self {
            ThemeMode::Light => "#ffffff",
            ThemeMode::Dark => "#111111",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    /// `black` is accepted as an alias of `dark`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" | "black" => Ok(ThemeMode::Dark),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}
