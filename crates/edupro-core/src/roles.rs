//! Portal roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role bound to a signed-in user.
///
/// A role decides which screens appear in the navigation menu. It is fixed
/// for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Every role, in registry order.
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Teacher, UserRole::Admin];

    /// Lowercase identifier, used for metric labels and CLI arguments.
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = match self {
            UserRole::Student => "STUDENT",
            UserRole::Teacher => "TEACHER",
            UserRole::Admin => "ADMIN",
        };
        f.write_str(badge)
    }
}

/// Error returned when a role name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Student".parse::<UserRole>().unwrap(), UserRole::Student);
        assert_eq!(" TEACHER ".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
    }

    #[test]
    fn test_parse_unknown_role() {
        let err = "principal".parse::<UserRole>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role: principal");
    }

    #[test]
    fn test_serde_uses_badge_names() {
        let json = serde_json::to_string(&UserRole::Teacher).unwrap();
        assert_eq!(json, r#""TEACHER""#);
        let role: UserRole = serde_json::from_str(r#""ADMIN""#).unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_display_matches_badge() {
        assert_eq!(UserRole::Student.to_string(), "STUDENT");
        assert_eq!(UserRole::Student.as_str(), "student");
    }
}
