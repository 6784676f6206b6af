//! Which screen is on display.

pub mod model;
pub mod service;

pub use model::NavigationState;
pub use service::NavigationService;
