//! # EduPro
//!
//! Core of a school portal for students, teachers and administrators,
//! driven from a terminal shell.
//!
//! ## Overview
//!
//! - **Session**: sign in with a username and password, sign out
//! - **Role registry**: each role sees a fixed, ordered set of screens
//! - **Navigation**: one active screen, always inside the role's menu
//! - **Attendance scanning**: the camera is held only while the attendance
//!   screen is open and scanning, and is released when either stops
//! - **Theme**: light or dark, kept across logins
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── edupro-core/           # roles, screens, role registry, theme, error kinds
//! ├── edupro-config/         # environment configuration
//! ├── edupro-models/         # users, demo accounts, avatars, static content
//! ├── edupro-auth/           # Authenticator seam
//! └── edupro-observability/  # tracing setup and counters
//! src/
//! ├── cli/                   # clap entry points and the command shell
//! ├── modules/               # one directory per screen or concern
//! │   ├── session/           # login, logout, avatar
//! │   ├── navigation/        # active screen
//! │   ├── attendance/        # camera lifecycle and scanner screen
//! │   ├── settings/          # theme and avatar upload
//! │   ├── exams/             # exam schedule, major selector
//! │   ├── dashboard/
//! │   └── academic/
//! ├── widgets/               # clock, notifications
//! ├── portal.rs              # mounts screens, renders frames
//! ├── state.rs               # AppState
//! └── utils/                 # errors, file uploads
//! ```
//!
//! Feature modules follow the same layout:
//!
//! - `mod.rs`: module exports
//! - `model.rs`: state owned by the module
//! - `service.rs`: operations on [`AppState`](state::AppState)
//! - `view.rs`: text rendering
//!
//! ## Roles
//!
//! | Role | Screens |
//! |------|---------|
//! | Student | Home, Academy, Scan, Exams, Settings |
//! | Teacher | Home, Academy, Scan, Exams, Settings |
//! | Admin | Home, Settings |
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run                                        # interactive shell
//! cargo run -- run "login bagus123 pw; go scan; scan; scan"
//! CAMERA_SIMULATION=denied cargo run -- run "login bagus123 pw; go scan; scan"
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: command-line entry points and the shell
//! - [`modules`]: feature modules
//! - [`portal`]: the portal shell
//! - [`state`]: shared application state
//! - [`utils`]: errors and file helpers
//! - [`widgets`]: clock and notifications

pub mod cli;
pub mod modules;
pub mod portal;
pub mod state;
pub mod utils;
pub mod widgets;

// Re-export workspace crates for convenience
pub use edupro_auth;
pub use edupro_config;
pub use edupro_core;
pub use edupro_models;
pub use edupro_observability;
