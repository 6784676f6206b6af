//! Login, logout and the identity bound to the session.

pub mod model;
pub mod service;
pub mod view;

pub use model::Session;
pub use service::SessionService;
