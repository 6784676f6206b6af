//! The attendance scanner's camera lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};

use edupro_core::CameraAccessError;
use edupro_observability::{track_camera_acquired, track_camera_error};
use tracing::{debug, info, instrument, warn};

use super::device::{CaptureDevice, MediaStream, StreamGuard};
use super::model::{AcquisitionTicket, CaptureConstraints, ScanState};

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Starts and stops camera capture for one mounted attendance screen.
///
/// At most one stream is held, and only in [`ScanState::Scanning`]. Dropping
/// the controller stops any scan in progress, so unmounting the screen
/// always releases the camera.
///
/// Acquisition is split in two so a caller can drive the device itself:
/// [`begin_scan`](Self::begin_scan) hands out a ticket and
/// [`complete_acquisition`](Self::complete_acquisition) applies the device's
/// answer. [`start_scan`](Self::start_scan) does both.
pub struct MediaController<D: CaptureDevice> {
    id: u64,
    device: D,
    constraints: CaptureConstraints,
    state: ScanState,
    stream: Option<StreamGuard<D::Stream>>,
    generation: u64,
}

impl<D: CaptureDevice> MediaController<D> {
    pub fn new(device: D, constraints: CaptureConstraints) -> Self {
        Self {
            id: NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed),
            device,
            constraints,
            state: ScanState::Idle,
            stream: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Whether scanning is switched on, including while waiting for the device.
    pub fn is_scanning(&self) -> bool {
        matches!(self.state, ScanState::Acquiring | ScanState::Scanning)
    }

    /// The last refusal, until the next attempt.
    pub fn error(&self) -> Option<&CameraAccessError> {
        match &self.state {
            ScanState::Errored(err) => Some(err),
            _ => None,
        }
    }

    pub fn stream(&self) -> Option<&D::Stream> {
        self.stream.as_ref().and_then(StreamGuard::stream)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn constraints(&self) -> &CaptureConstraints {
        &self.constraints
    }

    /// Switch scanning on and return the ticket for the pending request.
    ///
    /// Returns `None` if a scan is already running or pending.
    pub fn begin_scan(&mut self) -> Option<AcquisitionTicket> {
        if self.is_scanning() {
            debug!(state = self.state.label(), "Scan already in progress");
            return None;
        }

        self.generation += 1;
        self.state = ScanState::Acquiring;
        Some(AcquisitionTicket {
            controller: self.id,
            generation: self.generation,
        })
    }

    /// Apply the device's answer to the request identified by `ticket`.
    ///
    /// Returns `false` if the ticket is stale because the scan was stopped in
    /// the meantime, or was issued by another controller; a stream delivered
    /// against such a ticket is released immediately.
    pub fn complete_acquisition(
        &mut self,
        ticket: AcquisitionTicket,
        outcome: Result<D::Stream, CameraAccessError>,
    ) -> bool {
        let current = self.state == ScanState::Acquiring
            && ticket.controller == self.id
            && ticket.generation == self.generation;

        if !current {
            if let Ok(stream) = outcome {
                debug!(stream_id = stream.id(), "Releasing stream for cancelled scan");
                StreamGuard::new(stream).release();
            }
            return false;
        }

        match outcome {
            Ok(stream) => {
                info!(stream_id = stream.id(), device = stream.label(), "Camera acquired");
                track_camera_acquired();
                self.stream = Some(StreamGuard::new(stream));
                self.state = ScanState::Scanning;
            }
            Err(err) => {
                warn!(error = %err, "Camera access refused");
                track_camera_error(err.kind());
                self.state = ScanState::Errored(err);
            }
        }
        true
    }

    /// Request the camera and wait for the answer.
    ///
    /// Refusals are not returned; they leave the controller in
    /// [`ScanState::Errored`].
    #[instrument(skip(self))]
    pub async fn start_scan(&mut self) {
        let Some(ticket) = self.begin_scan() else {
            return;
        };
        let outcome = self.device.request(&self.constraints).await;
        self.complete_acquisition(ticket, outcome);
    }

    /// Switch scanning off, releasing the stream if one is held and
    /// invalidating any pending request. Safe to call at any time.
    pub fn stop_scan(&mut self) {
        match self.state {
            ScanState::Acquiring => {
                debug!("Pending camera request cancelled");
                self.generation += 1;
                self.state = ScanState::Idle;
            }
            ScanState::Scanning => {
                self.state = ScanState::Idle;
            }
            ScanState::Idle | ScanState::Errored(_) => {}
        }

        if let Some(guard) = self.stream.take() {
            guard.release();
        }
    }

    pub async fn toggle_scan(&mut self) {
        if self.is_scanning() {
            self.stop_scan();
        } else {
            self.start_scan().await;
        }
    }
}

impl<D: CaptureDevice> Drop for MediaController<D> {
    fn drop(&mut self) {
        self.stop_scan();
    }
}
