//! Logging configuration.
//!
//! - `LOG_LEVEL`: console level for portal crates (default: `warn`)
//! - `LOG_DIR`: directory for rolling log files (default: `storage/logs`)
//! - `OBSERVABILITY_ENABLED`: `false` selects console-only logging

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub dir: String,
    pub observability_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            dir: "storage/logs".to_string(),
            observability_enabled: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            level: lookup("LOG_LEVEL").unwrap_or(defaults.level),
            dir: lookup("LOG_DIR").unwrap_or(defaults.dir),
            observability_enabled: lookup("OBSERVABILITY_ENABLED")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
                .unwrap_or(defaults.observability_enabled),
        }
    }
}
