pub mod academic;
pub mod attendance;
pub mod dashboard;
pub mod exams;
pub mod navigation;
pub mod session;
pub mod settings;
