//! QR attendance scanning and the camera it borrows.

pub mod controller;
pub mod device;
pub mod model;
pub mod screen;
pub mod view;

pub use controller::MediaController;
pub use device::{CaptureDevice, DeviceStats, MediaStream, SimulatedCamera, SimulatedStream, StreamGuard};
pub use model::{AcquisitionTicket, CaptureConstraints, ScanState};
pub use screen::AttendanceScreen;
