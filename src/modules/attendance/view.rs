use edupro_models::catalog::{ATTENDANCE_SUMMARY, PresenceStatus, RECENT_PRESENCE};
use std::fmt::Write;

use super::controller::MediaController;
use super::device::{CaptureDevice, MediaStream};
use super::model::ScanState;

pub fn render<D: CaptureDevice>(controller: &MediaController<D>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Attendance Scanner");
    let _ = writeln!(out);

    match controller.state() {
        ScanState::Idle => {
            let _ = writeln!(out, "  Camera off. Run `scan` to start scanning.");
        }
        ScanState::Acquiring => {
            let _ = writeln!(out, "  Requesting camera access…");
        }
        ScanState::Scanning => {
            let label = controller.stream().map(MediaStream::label).unwrap_or("camera");
            let video = &controller.constraints().video;
            let _ = writeln!(
                out,
                "  ● LIVE  {label} {}x{}. Point it at the class QR code.",
                video.width.ideal, video.height.ideal
            );
        }
        ScanState::Errored(err) => {
            let _ = writeln!(out, "  Camera access denied: {err}.");
            let _ = writeln!(out, "  Allow camera access and run `scan` to retry.");
        }
    }
    let _ = writeln!(out);

    let summary = ATTENDANCE_SUMMARY;
    let _ = writeln!(
        out,
        "Present {}%  Late {}%  Absent {}%",
        summary.present, summary.late, summary.absent
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Recent presence");
    for record in &RECENT_PRESENCE {
        let status = match record.status {
            PresenceStatus::InTime => "in time",
            PresenceStatus::Late => "late",
        };
        let _ = writeln!(
            out,
            "  {} {} · {} · {}",
            record.date, record.time, record.location, status
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attendance::device::SimulatedCamera;
    use crate::modules::attendance::model::CaptureConstraints;
    use edupro_config::CameraSimulation;

    #[tokio::test]
    async fn test_render_follows_scan_state() {
        let camera = SimulatedCamera::instant();
        let mut controller = MediaController::new(camera.clone(), CaptureConstraints::default());
        assert!(render(&controller).contains("Camera off"));

        controller.toggle_scan().await;
        assert!(render(&controller).contains("LIVE  Simulated rear camera 1280x720"));

        controller.toggle_scan().await;
        camera.set_simulation(CameraSimulation::Denied);
        controller.toggle_scan().await;
        assert!(render(&controller).contains("Camera access denied: camera permission denied."));
    }
}
