//! Portal counters.
//!
//! The recorder renders the Prometheus text format on demand; there is no
//! scrape endpoint.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

/// Install the global recorder. Returns `None` if one is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!(error = %e, "Failed to install metrics recorder");
            None
        }
    }
}

pub fn track_login_success(role: &str) {
    counter!("edupro_logins_total", "outcome" => "success", "role" => role.to_string()).increment(1);
}

pub fn track_login_failure(reason: &str) {
    counter!("edupro_logins_total", "outcome" => "failure", "reason" => reason.to_string())
        .increment(1);
}

pub fn track_logout() {
    counter!("edupro_logouts_total").increment(1);
}

pub fn track_screen_view(screen: &str) {
    counter!("edupro_screen_views_total", "screen" => screen.to_string()).increment(1);
}

pub fn track_navigation_denied(screen: &str) {
    counter!("edupro_navigation_denied_total", "screen" => screen.to_string()).increment(1);
}

pub fn track_camera_acquired() {
    counter!("edupro_camera_acquisitions_total").increment(1);
}

pub fn track_camera_released() {
    counter!("edupro_camera_releases_total").increment(1);
}

pub fn track_camera_error(kind: &str) {
    counter!("edupro_camera_errors_total", "kind" => kind.to_string()).increment(1);
}

pub fn track_theme_changed(mode: &str) {
    counter!("edupro_theme_changes_total", "mode" => mode.to_string()).increment(1);
}

pub fn track_avatar_updated() {
    counter!("edupro_avatar_updates_total").increment(1);
}
