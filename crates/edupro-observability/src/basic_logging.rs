use edupro_config::LoggingConfig;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events the portal logs at the configured level.
pub(crate) const PORTAL_TARGETS: [&str; 5] = [
    "edupro",
    "edupro_auth",
    "edupro_core",
    "edupro_models",
    "edupro_observability",
];

/// `EnvFilter` directives for the portal crates at `level`.
pub(crate) fn portal_directives(level: &str) -> String {
    PORTAL_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize basic console logging when file logging is disabled.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "warn"); `RUST_LOG` overrides it
/// - **Writer**: stderr, so shell output on stdout stays readable
/// - **Format**: compact with ANSI colors
pub fn init_basic_console_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(portal_directives(&config.level)));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    if let Err(e) = tracing_subscriber::registry().with(console_layer).try_init() {
        eprintln!("⚠️  Logging already initialized: {e}");
        return;
    }

    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}
