//! Authentication configuration.
//!
//! - `AUTH_MODE`: `demo` binds the demo student on every login (default);
//!   `directory` binds the demo account whose username matches.

use std::str::FromStr;

/// How credentials are turned into a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Demo,
    Directory,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(AuthMode::Demo),
            "directory" => Ok(AuthMode::Directory),
            other => Err(format!("unknown auth mode: {other}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub mode: AuthMode,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            mode: crate::parse_or(lookup, "AUTH_MODE", AuthMode::Demo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_demo() {
        assert_eq!(AuthConfig::from_lookup(&|_| None).mode, AuthMode::Demo);
    }

    #[test]
    fn test_directory_mode() {
        let config = AuthConfig::from_lookup(&|key| (key == "AUTH_MODE").then(|| "Directory".into()));
        assert_eq!(config.mode, AuthMode::Directory);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let config = AuthConfig::from_lookup(&|_| Some("ldap".into()));
        assert_eq!(config.mode, AuthMode::Demo);
    }
}
