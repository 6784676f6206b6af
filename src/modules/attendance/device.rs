//! Capture devices and stream ownership.
//!
//! [`CaptureDevice`] is the seam to the platform camera. Whatever it hands
//! out is wrapped in a [`StreamGuard`] straight away; the guard stops every
//! track when it goes out of scope, so a stream cannot outlive the screen
//! that asked for it.

use edupro_config::{CameraConfig, CameraSimulation};
use edupro_core::CameraAccessError;
use edupro_observability::track_camera_released;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::model::CaptureConstraints;

/// A live capture stream.
pub trait MediaStream {
    fn id(&self) -> &str;

    /// Human-readable device label.
    fn label(&self) -> &str;

    /// Stop every track. Called exactly once per stream, by [`StreamGuard`].
    fn stop_all_tracks(&mut self);
}

/// Something that can be asked for a camera stream.
pub trait CaptureDevice {
    type Stream: MediaStream;

    /// Ask for a stream matching `constraints`. Resolves once the user (or
    /// the platform) has answered.
    fn request(
        &self,
        constraints: &CaptureConstraints,
    ) -> impl Future<Output = Result<Self::Stream, CameraAccessError>>;
}

/// Owns a stream and releases it on drop.
#[derive(Debug)]
pub struct StreamGuard<S: MediaStream> {
    stream: Option<S>,
}

impl<S: MediaStream> StreamGuard<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    /// Release now instead of at end of scope.
    pub fn release(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop_all_tracks();
            debug!(stream_id = stream.id(), "Camera stream released");
            track_camera_released();
        }
    }
}

impl<S: MediaStream> Drop for StreamGuard<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// Simulated camera
// ============================================================================

/// Counters shared by a [`SimulatedCamera`] and every stream it opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Streams handed out.
    pub opened: usize,
    /// Streams whose tracks were stopped.
    pub released: usize,
}

impl DeviceStats {
    pub fn live(&self) -> usize {
        self.opened - self.released
    }
}

#[derive(Debug, Default)]
struct Shared {
    simulation: AtomicU8,
    opened: AtomicUsize,
    released: AtomicUsize,
}

fn encode(simulation: CameraSimulation) -> u8 {
    match simulation {
        CameraSimulation::Granted => 0,
        CameraSimulation::Denied => 1,
        CameraSimulation::Missing => 2,
        CameraSimulation::Busy => 3,
    }
}

fn decode(value: u8) -> CameraSimulation {
    match value {
        1 => CameraSimulation::Denied,
        2 => CameraSimulation::Missing,
        3 => CameraSimulation::Busy,
        _ => CameraSimulation::Granted,
    }
}

/// An in-process camera.
///
/// Answers requests according to its [`CameraSimulation`] after a fixed
/// latency and counts every open and release. It is exclusive: while one of
/// its streams is live, further requests fail with
/// [`CameraAccessError::DeviceBusy`]. Clones share the same device.
#[derive(Debug, Clone)]
pub struct SimulatedCamera {
    shared: Arc<Shared>,
    latency: Duration,
}

impl SimulatedCamera {
    pub fn new(simulation: CameraSimulation, latency: Duration) -> Self {
        let shared = Shared::default();
        shared.simulation.store(encode(simulation), Ordering::SeqCst);
        Self {
            shared: Arc::new(shared),
            latency,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.simulation, config.latency)
    }

    /// A granting camera that answers immediately.
    pub fn instant() -> Self {
        Self::new(CameraSimulation::Granted, Duration::ZERO)
    }

    pub fn simulation(&self) -> CameraSimulation {
        decode(self.shared.simulation.load(Ordering::SeqCst))
    }

    /// Change how later requests are answered, e.g. the user granting
    /// permission after a denial.
    pub fn set_simulation(&self, simulation: CameraSimulation) {
        self.shared
            .simulation
            .store(encode(simulation), Ordering::SeqCst);
    }

    pub fn stats(&self) -> DeviceStats {
        DeviceStats {
            opened: self.shared.opened.load(Ordering::SeqCst),
            released: self.shared.released.load(Ordering::SeqCst),
        }
    }

    fn open(&self) -> Result<SimulatedStream, CameraAccessError> {
        match self.simulation() {
            CameraSimulation::Denied => return Err(CameraAccessError::PermissionDenied),
            CameraSimulation::Missing => return Err(CameraAccessError::NoDevice),
            CameraSimulation::Busy => return Err(CameraAccessError::DeviceBusy),
            CameraSimulation::Granted => {}
        }

        if self.stats().live() > 0 {
            return Err(CameraAccessError::DeviceBusy);
        }

        self.shared.opened.fetch_add(1, Ordering::SeqCst);
        Ok(SimulatedStream {
            id: Uuid::new_v4().to_string(),
            label: "Simulated rear camera".to_string(),
            tracks: vec![TrackState::Live],
            shared: Arc::clone(&self.shared),
        })
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CaptureDevice for SimulatedCamera {
    type Stream = SimulatedStream;

    async fn request(
        &self,
        constraints: &CaptureConstraints,
    ) -> Result<SimulatedStream, CameraAccessError> {
        debug!(facing_mode = ?constraints.video.facing_mode, "Camera requested");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.open()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    Live,
    Ended,
}

#[derive(Debug)]
pub struct SimulatedStream {
    id: String,
    label: String,
    tracks: Vec<TrackState>,
    shared: Arc<Shared>,
}

impl SimulatedStream {
    pub fn tracks(&self) -> &[TrackState] {
        &self.tracks
    }
}

impl MediaStream for SimulatedStream {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn stop_all_tracks(&mut self) {
        if self.tracks.iter().all(|track| *track == TrackState::Ended) {
            return;
        }
        self.tracks.fill(TrackState::Ended);
        self.shared.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_granted_stream_counts_open_and_release() {
        let camera = SimulatedCamera::instant();
        let stream = camera.request(&CaptureConstraints::default()).await.unwrap();
        assert_eq!(stream.tracks(), &[TrackState::Live]);
        assert_eq!(camera.stats(), DeviceStats { opened: 1, released: 0 });

        let guard = StreamGuard::new(stream);
        drop(guard);
        assert_eq!(camera.stats(), DeviceStats { opened: 1, released: 1 });
    }

    #[tokio::test]
    async fn test_refusals_follow_simulation() {
        let camera = SimulatedCamera::new(CameraSimulation::Denied, Duration::ZERO);
        let constraints = CaptureConstraints::default();
        assert_eq!(
            camera.request(&constraints).await.unwrap_err(),
            CameraAccessError::PermissionDenied
        );

        camera.set_simulation(CameraSimulation::Missing);
        assert_eq!(
            camera.request(&constraints).await.unwrap_err(),
            CameraAccessError::NoDevice
        );

        camera.set_simulation(CameraSimulation::Busy);
        assert_eq!(
            camera.request(&constraints).await.unwrap_err(),
            CameraAccessError::DeviceBusy
        );
        assert_eq!(camera.stats().opened, 0);
    }

    #[tokio::test]
    async fn test_device_is_exclusive() {
        let camera = SimulatedCamera::instant();
        let constraints = CaptureConstraints::default();
        let first = StreamGuard::new(camera.request(&constraints).await.unwrap());

        let err = camera.clone().request(&constraints).await.unwrap_err();
        assert_eq!(err, CameraAccessError::DeviceBusy);

        first.release();
        assert!(camera.request(&constraints).await.is_ok());
    }

    #[test]
    fn test_stop_all_tracks_counts_once() {
        let camera = SimulatedCamera::instant();
        let mut stream = camera.open().unwrap();
        stream.stop_all_tracks();
        stream.stop_all_tracks();
        assert_eq!(camera.stats().released, 1);
        assert_eq!(stream.tracks(), &[TrackState::Ended]);
    }
}
