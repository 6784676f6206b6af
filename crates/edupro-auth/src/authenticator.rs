//! Authenticators.

use crate::error::AuthError;
use edupro_config::{AuthConfig, AuthMode};
use edupro_models::{LoginRequest, User, demo_accounts};
use std::sync::Arc;
use tracing::{debug, instrument};
use validator::Validate;

/// Binds credentials to a user.
///
/// Implementations receive requests that already passed form validation.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, request: &LoginRequest) -> Result<User, AuthError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Always binds the demo student.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, _request: &LoginRequest) -> Result<User, AuthError> {
        Ok(demo_accounts::student())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Binds the demo account whose username matches.
///
/// Passwords are not checked; the demo accounts have none.
#[derive(Debug, Clone)]
pub struct DirectoryAuthenticator {
    accounts: Vec<User>,
}

impl DirectoryAuthenticator {
    pub fn new() -> Self {
        Self {
            accounts: demo_accounts::all(),
        }
    }

    pub fn with_accounts(accounts: Vec<User>) -> Self {
        Self { accounts }
    }
}

impl Default for DirectoryAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for DirectoryAuthenticator {
    fn authenticate(&self, request: &LoginRequest) -> Result<User, AuthError> {
        let username = request.username.trim();
        self.accounts
            .iter()
            .find(|user| user.username.eq_ignore_ascii_case(username))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

/// The authenticator selected by configuration.
pub fn authenticator_for(config: &AuthConfig) -> Arc<dyn Authenticator> {
    match config.mode {
        AuthMode::Demo => Arc::new(DemoAuthenticator),
        AuthMode::Directory => Arc::new(DirectoryAuthenticator::new()),
    }
}

/// Validate the sign-in form, then run `authenticator`.
#[instrument(skip(authenticator), fields(authenticator = authenticator.name()))]
pub fn verify_credentials(
    authenticator: &dyn Authenticator,
    request: &LoginRequest,
) -> Result<User, AuthError> {
    request.validate()?;
    let user = authenticator.authenticate(request)?;
    debug!(user_id = %user.id, role = %user.role, "Credentials accepted");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_core::UserRole;
    use fake::Fake;
    use fake::faker::internet::en::{Password, Username};

    #[test]
    fn test_demo_binds_student_for_any_credentials() {
        for _ in 0..20 {
            let username: String = Username().fake();
            let password: String = Password(1..16).fake();
            let user =
                verify_credentials(&DemoAuthenticator, &LoginRequest::new(username, password)).unwrap();
            assert_eq!(user.username, "bagus123");
        }
    }

    #[test]
    fn test_empty_form_rejected_before_authenticator() {
        let err = verify_credentials(&DemoAuthenticator, &LoginRequest::new("", "x")).unwrap_err();
        assert_eq!(err, AuthError::Validation("username is required".into()));

        let err = verify_credentials(&DemoAuthenticator, &LoginRequest::new("", "")).unwrap_err();
        assert_eq!(
            err,
            AuthError::Validation("password is required, username is required".into())
        );
    }

    #[test]
    fn test_directory_binds_matching_account() {
        let directory = DirectoryAuthenticator::new();
        let admin = verify_credentials(&directory, &LoginRequest::new("admin", "pw")).unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        let teacher = verify_credentials(&directory, &LoginRequest::new(" anita_teacher ", "pw")).unwrap();
        assert_eq!(teacher.role, UserRole::Teacher);
    }

    #[test]
    fn test_directory_rejects_unknown_username() {
        let directory = DirectoryAuthenticator::new();
        let err = verify_credentials(&directory, &LoginRequest::new("ghost", "pw")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.reason(), "invalid_credentials");
    }

    #[test]
    fn test_authenticator_for_config() {
        let demo = authenticator_for(&AuthConfig { mode: AuthMode::Demo });
        assert_eq!(demo.name(), "demo");
        let directory = authenticator_for(&AuthConfig {
            mode: AuthMode::Directory,
        });
        assert_eq!(directory.name(), "directory");
    }
}
