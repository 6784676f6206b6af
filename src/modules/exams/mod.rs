//! Exam schedule and the per-major programme selector.

pub mod model;
pub mod view;

pub use model::ExamsScreen;
