//! User domain models.
//!
//! This module contains the identity record bound to a session and the fixed
//! demo accounts the portal ships with.
//!
//! # Core Types
//!
//! - [`User`] - identity record of the signed-in person
//! - [`UserStatus`] - enrolment or employment status
//!
//! # Demo Accounts
//!
//! The [`demo_accounts`] module provides the three built-in accounts:
//!
//! - Student *Bagus Prayoga* (`bagus123`)
//! - Teacher *Anita Widjaja* (`anita_teacher`)
//! - Admin *System Admin* (`admin`)

use crate::ids::{MajorId, UserId};
use crate::value_types::{AvatarRef, Email};
use edupro_core::UserRole;
use serde::{Deserialize, Serialize};

/// Enrolment or employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Graduated,
}

/// The identity record of a signed-in user.
///
/// Only [`User::avatar`] changes during a session; everything else is fixed
/// at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub username: String,
    pub role: UserRole,
    pub avatar: AvatarRef,
    /// National student number (NISN), students only.
    pub student_number: Option<String>,
    /// Civil-servant staff number (NIP), teachers only.
    pub staff_number: Option<String>,
    pub major_id: Option<MajorId>,
    pub class_name: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub status: Option<UserStatus>,
}

impl User {
    /// The identifier shown on the profile badge.
    pub fn badge_number(&self) -> &str {
        self.student_number
            .as_deref()
            .or(self.staff_number.as_deref())
            .unwrap_or("ID-001")
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// The built-in demo accounts.
pub mod demo_accounts {
    use super::*;
    use crate::catalog::majors;

    pub const STUDENT_ID: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);
    pub const TEACHER_ID: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0002);
    pub const ADMIN_ID: UserId = UserId::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0003);

    pub fn student() -> User {
        User {
            id: STUDENT_ID,
            name: "Bagus Prayoga".to_string(),
            email: Email::new_unchecked("bagus@student.edupro.sch.id"),
            username: "bagus123".to_string(),
            role: UserRole::Student,
            avatar: AvatarRef::url("https://picsum.photos/seed/bagus/200"),
            student_number: Some("0054321987".to_string()),
            staff_number: None,
            major_id: Some(majors::SOFTWARE_ENGINEERING),
            class_name: Some("XII RPL 1".to_string()),
            subjects: Vec::new(),
            status: Some(UserStatus::Active),
        }
    }

    pub fn teacher() -> User {
        User {
            id: TEACHER_ID,
            name: "Anita Widjaja".to_string(),
            email: Email::new_unchecked("anita@teacher.edupro.sch.id"),
            username: "anita_teacher".to_string(),
            role: UserRole::Teacher,
            avatar: AvatarRef::url("https://picsum.photos/seed/anita/200"),
            student_number: None,
            staff_number: Some("198804052012012001".to_string()),
            major_id: None,
            class_name: None,
            subjects: vec!["Web Development".to_string(), "UI/UX Design".to_string()],
            status: Some(UserStatus::Active),
        }
    }

    pub fn admin() -> User {
        User {
            id: ADMIN_ID,
            name: "System Admin".to_string(),
            email: Email::new_unchecked("admin@edupro.sch.id"),
            username: "admin".to_string(),
            role: UserRole::Admin,
            avatar: AvatarRef::url("https://picsum.photos/seed/admin/200"),
            student_number: None,
            staff_number: None,
            major_id: None,
            class_name: None,
            subjects: Vec::new(),
            status: Some(UserStatus::Active),
        }
    }

    pub fn all() -> Vec<User> {
        vec![student(), teacher(), admin()]
    }

    /// Demo account with the given username, compared case-insensitively.
    pub fn find_by_username(username: &str) -> Option<User> {
        all()
            .into_iter()
            .find(|user| user.username.eq_ignore_ascii_case(username.trim()))
    }
}
