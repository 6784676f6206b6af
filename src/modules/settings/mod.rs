//! Theme and profile settings.

pub mod model;
pub mod service;
pub mod view;

pub use model::ThemePreference;
pub use service::SettingsService;
