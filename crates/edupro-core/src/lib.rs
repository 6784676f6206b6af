//! # EduPro Core
//!
//! Core types shared by every EduPro crate.
//!
//! - [`roles`]: the portal roles (student, teacher, admin)
//! - [`screens`]: navigable screens and the role registry that decides which
//!   screens each role may open
//! - [`theme`]: light and dark presentation modes
//! - [`errors`]: error kinds raised at the navigation and camera boundaries
//!
//! # Example
//!
//! ```
//! use edupro_core::{ScreenId, UserRole, visible_menu};
//!
//! let menu = visible_menu(UserRole::Admin);
//! assert_eq!(menu, &[ScreenId::Home, ScreenId::Settings]);
//! ```

pub mod errors;
pub mod roles;
pub mod screens;
pub mod theme;

// Re-export commonly used types at crate root
pub use errors::{CameraAccessError, NavigationError};
pub use roles::UserRole;
pub use screens::{ScreenId, is_permitted, visible_menu};
pub use theme::ThemeMode;
