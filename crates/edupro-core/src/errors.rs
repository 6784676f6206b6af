//! Error kinds raised at the navigation and camera boundaries.

use crate::roles::UserRole;
use crate::screens::ScreenId;

/// Navigation was refused by the role registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// `screen` is not in the menu of `role`. `role` is `None` while logged out.
    #[error("screen `{screen}` is not permitted for {}", describe_role(.role))]
    ScreenNotPermitted {
        screen: ScreenId,
        role: Option<UserRole>,
    },
}

fn describe_role(role: &Option<UserRole>) -> String {
    match role {
        Some(role) => format!("role {role}"),
        None => "an anonymous session".to_string(),
    }
}

/// The capture device could not be acquired.
///
/// These never escape the media controller; they become a visible
/// "access denied" state on the attendance screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraAccessError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device available")]
    NoDevice,

    #[error("camera is in use by another session")]
    DeviceBusy,

    #[error("camera hardware error: {0}")]
    Hardware(String),
}

impl CameraAccessError {
    /// Short label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CameraAccessError::PermissionDenied => "permission_denied",
            CameraAccessError::NoDevice => "no_device",
            CameraAccessError::DeviceBusy => "device_busy",
            CameraAccessError::Hardware(_) => "hardware",
        }
    }
}
