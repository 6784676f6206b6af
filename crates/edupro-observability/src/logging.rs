//! Console and rolling-file logging.

use crate::basic_logging::{init_basic_console_logging, portal_directives};
use edupro_config::LoggingConfig;
use std::fs;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Whether full observability is active for `config`.
pub fn is_observability_enabled(config: &LoggingConfig) -> bool {
    config.observability_enabled
}

/// Install the global subscriber.
///
/// Layers:
///
/// - console (stderr) filtered by `LOG_LEVEL` or `RUST_LOG`
/// - `edupro.log`, daily rolling, errors only
/// - `edupro.json`, daily rolling, structured events at info and above
///
/// Falls back to console-only logging when observability is disabled or the
/// log directory cannot be created.
pub fn init_tracing(config: &LoggingConfig) {
    if !is_observability_enabled(config) {
        init_basic_console_logging(config);
        return;
    }

    if let Err(e) = fs::create_dir_all(&config.dir) {
        eprintln!(
            "⚠️  Failed to create log directory {}: {}. Continuing with console logging...",
            config.dir, e
        );
        init_basic_console_logging(config);
        return;
    }

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(portal_directives(&config.level)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // File layer for errors
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.dir, "edupro.log");

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // JSON file layer for structured logs
    let json_appender = RollingFileAppender::new(Rotation::DAILY, &config.dir, "edupro.json");

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new(portal_directives("info")));

    match tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()
    {
        Ok(()) => info!(log_dir = %config.dir, "Tracing initialized with file logging"),
        Err(e) => warn!(error = %e, "Tracing subscriber was already installed"),
    }
}
