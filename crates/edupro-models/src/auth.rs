//! Sign-in form models.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Credentials submitted from the sign-in form.
///
/// Both fields are required; [`Validate`] rejects empty values before any
/// authenticator sees them.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        assert!(LoginRequest::new("bagus123", "x").validate().is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let errors = LoginRequest::new("", "").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", LoginRequest::new("bagus123", "hunter2"));
        assert!(debug.contains("bagus123"));
        assert!(!debug.contains("hunter2"));
    }
}
