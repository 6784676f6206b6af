//! # EduPro Models
//!
//! Domain models for the EduPro portal.
//!
//! # Modules
//!
//! - [`auth`]: sign-in form credentials
//! - [`catalog`]: static content (majors, announcements, assignments, exams, ...)
//! - [`ids`]: strongly-typed entity ids
//! - [`users`]: the user identity record and the built-in demo accounts
//! - [`value_types`]: validated primitives (email, avatar reference)
//!
//! # Example
//!
//! ```
//! use edupro_models::users::demo_accounts;
//! use edupro_models::UserRole;
//!
//! let student = demo_accounts::student();
//! assert_eq!(student.role, UserRole::Student);
//! ```

pub mod auth;
pub mod catalog;
pub mod ids;
pub mod users;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use auth::LoginRequest;
pub use edupro_core::{ScreenId, ThemeMode, UserRole};
pub use ids::{MajorId, UserId};
pub use users::{User, UserStatus, demo_accounts};
pub use value_types::{AvatarError, AvatarRef, AvatarUpload, Email, ValueTypeError};
