//! Attendance data: capture constraints and scan state.

use edupro_config::{CameraConfig, FacingMode};
use edupro_core::CameraAccessError;
use serde::Serialize;

/// Media constraints sent with a capture request.
///
/// Serializes to the browser `getUserMedia` shape:
/// `{"video":{"facingMode":"environment","width":{"ideal":1280},"height":{"ideal":720}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureConstraints {
    pub video: VideoConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub facing_mode: FacingMode,
    pub width: Ideal,
    pub height: Ideal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ideal {
    pub ideal: u32,
}

impl CaptureConstraints {
    pub fn rear_camera(width: u32, height: u32) -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: FacingMode::Environment,
                width: Ideal { ideal: width },
                height: Ideal { ideal: height },
            },
        }
    }
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self::rear_camera(1280, 720)
    }
}

impl From<&CameraConfig> for CaptureConstraints {
    fn from(config: &CameraConfig) -> Self {
        Self {
            video: VideoConstraints {
                facing_mode: config.facing_mode,
                width: Ideal {
                    ideal: config.ideal_width,
                },
                height: Ideal {
                    ideal: config.ideal_height,
                },
            },
        }
    }
}

/// Where the scanner is in its lifecycle.
///
/// ```text
/// Idle ──toggle──▶ Acquiring ──granted──▶ Scanning ──toggle/unmount──▶ Idle
///                      │
///                      └──refused──▶ Errored ──toggle──▶ Acquiring
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    /// Waiting for the device to answer.
    Acquiring,
    /// A live stream is held.
    Scanning,
    /// The last request was refused. Shown as "access denied" until retried.
    Errored(CameraAccessError),
}

impl ScanState {
    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Acquiring => "acquiring",
            ScanState::Scanning => "scanning",
            ScanState::Errored(_) => "errored",
        }
    }
}

/// Proof that a capture request was started by [`MediaController::begin_scan`].
///
/// A ticket is only honoured by the controller that issued it. It goes stale
/// once the scan it belongs to is stopped, and a stream delivered against a
/// stale or foreign ticket is released on arrival.
///
/// [`MediaController::begin_scan`]: super::controller::MediaController::begin_scan
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct AcquisitionTicket {
    pub(crate) controller: u64,
    pub(crate) generation: u64,
}
