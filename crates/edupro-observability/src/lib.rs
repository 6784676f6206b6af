//! EduPro Observability Module
//!
//! Provides configurable observability features including:
//! - Console logging plus daily rolling error and JSON log files
//! - Counters recorded in the Prometheus text format
//!
//! Everything except console logging sits behind the `observability` feature
//! flag. At runtime, file logging can be turned off via the
//! `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): rolling log files and the metrics recorder
//!
//! # Examples
//!
//! ```no_run
//! use edupro_config::LoggingConfig;
//! use edupro_observability::{init_metrics, init_tracing};
//!
//! init_tracing(&LoggingConfig::from_env());
//! let metrics = init_metrics();
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

// Re-export PrometheusHandle type when observability is enabled
#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

// Public exports when observability is enabled
#[cfg(feature = "observability")]
pub use self::logging::{init_tracing, is_observability_enabled};
#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, track_avatar_updated, track_camera_acquired, track_camera_error,
    track_camera_released, track_login_failure, track_login_success, track_logout,
    track_navigation_denied, track_screen_view, track_theme_changed,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use edupro_config::LoggingConfig;

    /// Stand-in for the Prometheus handle; renders nothing.
    #[derive(Clone, Debug, Default)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled(_config: &LoggingConfig) -> bool {
        false
    }

    /// Console logging only when feature disabled
    pub fn init_tracing(config: &LoggingConfig) {
        crate::basic_logging::init_basic_console_logging(config);
    }

    /// No-op metrics initialization when feature disabled
    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    // No-op tracking functions
    pub fn track_login_success(_role: &str) {}
    pub fn track_login_failure(_reason: &str) {}
    pub fn track_logout() {}
    pub fn track_screen_view(_screen: &str) {}
    pub fn track_navigation_denied(_screen: &str) {}
    pub fn track_camera_acquired() {}
    pub fn track_camera_released() {}
    pub fn track_camera_error(_kind: &str) {}
    pub fn track_theme_changed(_mode: &str) {}
    pub fn track_avatar_updated() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
