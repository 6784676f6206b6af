use tracing::info;

use super::controller::MediaController;
use super::device::CaptureDevice;
use super::model::CaptureConstraints;

/// The attendance screen while it is on display.
///
/// Owns the [`MediaController`]; unmounting (or simply dropping) the screen
/// releases the camera.
pub struct AttendanceScreen<D: CaptureDevice> {
    controller: MediaController<D>,
}

impl<D: CaptureDevice> AttendanceScreen<D> {
    pub fn mount(device: D, constraints: CaptureConstraints) -> Self {
        info!("Attendance screen mounted");
        Self {
            controller: MediaController::new(device, constraints),
        }
    }

    pub fn controller(&self) -> &MediaController<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MediaController<D> {
        &mut self.controller
    }

    pub async fn toggle_scan(&mut self) {
        self.controller.toggle_scan().await;
    }

    pub fn unmount(self) {
        info!(scanning = self.controller.is_scanning(), "Attendance screen unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attendance::device::{DeviceStats, SimulatedCamera};

    #[tokio::test]
    async fn test_unmount_mid_scan_releases_camera() {
        let camera = SimulatedCamera::instant();
        let mut screen = AttendanceScreen::mount(camera.clone(), CaptureConstraints::default());
        screen.toggle_scan().await;
        assert!(screen.controller().is_scanning());

        screen.unmount();
        assert_eq!(camera.stats(), DeviceStats { opened: 1, released: 1 });
    }

    #[test]
    fn test_unmount_idle_touches_nothing() {
        let camera = SimulatedCamera::instant();
        AttendanceScreen::mount(camera.clone(), CaptureConstraints::default()).unmount();
        assert_eq!(camera.stats(), DeviceStats::default());
    }
}
