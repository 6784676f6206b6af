//! Navigable screens and the role registry.
//!
//! The registry is a single static table from [`UserRole`] to the ordered list
//! of screens that role may open. Menu order is the rendering order, so the
//! tables below are the source of truth for both visibility and layout.
//!
//! # Example
//!
//! ```
//! use edupro_core::{ScreenId, UserRole, is_permitted};
//!
//! assert!(is_permitted(UserRole::Teacher, ScreenId::Attendance));
//! assert!(!is_permitted(UserRole::Admin, ScreenId::Exams));
//! ```

use crate::roles::UserRole;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a top-level view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    #[default]
    Home,
    Academic,
    Attendance,
    Exams,
    Settings,
}

impl ScreenId {
    /// Every screen, in declaration order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Home,
        ScreenId::Academic,
        ScreenId::Attendance,
        ScreenId::Exams,
        ScreenId::Settings,
    ];

    /// Stable identifier used in commands and logs.
    pub const fn slug(self) -> &'static str {
        match self {
            ScreenId::Home => "dashboard",
            ScreenId::Academic => "academic",
            ScreenId::Attendance => "attendance",
            ScreenId::Exams => "exams",
            ScreenId::Settings => "settings",
        }
    }

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::Academic => "Academy",
            ScreenId::Attendance => "Scan",
            ScreenId::Exams => "Exams",
            ScreenId::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a screen name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    /// Accepts the slug, the menu label, or `home`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if needle == "home" {
            return Ok(ScreenId::Home);
        }
        ScreenId::ALL
            .into_iter()
            .find(|screen| screen.slug() == needle || screen.label().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

const STUDENT_MENU: [ScreenId; 5] = [
    ScreenId::Home,
    ScreenId::Academic,
    ScreenId::Attendance,
    ScreenId::Exams,
    ScreenId::Settings,
];

const TEACHER_MENU: [ScreenId; 5] = STUDENT_MENU;

const ADMIN_MENU: [ScreenId; 2] = [ScreenId::Home, ScreenId::Settings];

/// Ordered screens visible to `role`.
///
/// Every menu starts with [`ScreenId::Home`] and ends with
/// [`ScreenId::Settings`].
pub const fn visible_menu(role: UserRole) -> &'static [ScreenId] {
    match role {
        UserRole::Student => &STUDENT_MENU,
        UserRole::Teacher => &TEACHER_MENU,
        UserRole::Admin => &ADMIN_MENU,
    }
}

/// Whether `role` may open `screen`.
pub fn is_permitted(role: UserRole, screen: ScreenId) -> bool {
    visible_menu(role).contains(&screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_is_non_empty_and_framed() {
        for role in UserRole::ALL {
            let menu = visible_menu(role);
            assert!(!menu.is_empty());
            assert_eq!(menu.first(), Some(&ScreenId::Home));
            assert_eq!(menu.last(), Some(&ScreenId::Settings));
        }
    }

    #[test]
    fn test_student_and_teacher_share_full_menu() {
        let expected = [
            ScreenId::Home,
            ScreenId::Academic,
            ScreenId::Attendance,
            ScreenId::Exams,
            ScreenId::Settings,
        ];
        assert_eq!(visible_menu(UserRole::Student), &expected);
        assert_eq!(visible_menu(UserRole::Teacher), &expected);
    }

    #[test]
    fn test_admin_menu_excludes_classroom_screens() {
        let menu = visible_menu(UserRole::Admin);
        assert!(!menu.contains(&ScreenId::Academic));
        assert!(!menu.contains(&ScreenId::Attendance));
        assert!(!menu.contains(&ScreenId::Exams));
    }

    #[test]
    fn test_menu_is_deterministic() {
        for role in UserRole::ALL {
            assert_eq!(visible_menu(role), visible_menu(role));
        }
    }

    #[test]
    fn test_parse_accepts_slug_label_and_home() {
        assert_eq!("dashboard".parse::<ScreenId>().unwrap(), ScreenId::Home);
        assert_eq!("home".parse::<ScreenId>().unwrap(), ScreenId::Home);
        assert_eq!("Scan".parse::<ScreenId>().unwrap(), ScreenId::Attendance);
        assert_eq!("academy".parse::<ScreenId>().unwrap(), ScreenId::Academic);
        assert_eq!("EXAMS".parse::<ScreenId>().unwrap(), ScreenId::Exams);
    }

    #[test]
    fn test_parse_rejects_internship() {
        assert!("internship".parse::<ScreenId>().is_err());
    }

    #[test]
    fn test_default_screen_is_home() {
        assert_eq!(ScreenId::default(), ScreenId::Home);
    }
}
