pub mod clock;
pub mod notifications;

pub use clock::RealTimeClock;
