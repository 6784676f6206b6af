use anyhow::Error;
use edupro_auth::AuthError;
use edupro_core::{NavigationError, ScreenId};
use edupro_models::AvatarError;
use std::fmt;

/// Broad category of a [`PortalError`], used to pick the message shown to
/// the user and the log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input: a malformed command, an invalid form, an unusable file.
    BadRequest,
    /// Credentials were refused.
    Unauthorized,
    /// The role registry refused the action.
    Forbidden,
    /// The referenced item does not exist.
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug)]
pub struct PortalError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl PortalError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::BadRequest, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Forbidden, err)
    }

    /// The screen whose action was requested is not on display.
    pub fn screen_not_open(screen: ScreenId) -> Self {
        Self::bad_request(anyhow::anyhow!("the {} screen is not open", screen.label()))
    }

    /// Typed view of the underlying error, if it is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.error.downcast_ref::<E>()
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

impl From<AuthError> for PortalError {
    fn from(err: AuthError) -> Self {
        let kind = match err {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
        };
        Self::new(kind, err)
    }
}

impl From<NavigationError> for PortalError {
    fn from(err: NavigationError) -> Self {
        Self::forbidden(err)
    }
}

impl From<AvatarError> for PortalError {
    fn from(err: AvatarError) -> Self {
        Self::bad_request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_core::UserRole;

    #[test]
    fn test_auth_errors_map_to_kinds() {
        let err: PortalError = AuthError::InvalidCredentials.into();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err: PortalError = AuthError::Validation("username is required".into()).into();
        assert_eq!(err.kind, ErrorKind::BadRequest);
    }

    #[test]
    fn test_navigation_error_is_forbidden_and_downcasts() {
        let nav = NavigationError::ScreenNotPermitted {
            screen: ScreenId::Exams,
            role: Some(UserRole::Admin),
        };
        let err: PortalError = nav.clone().into();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.downcast_ref::<NavigationError>(), Some(&nav));
        assert_eq!(err.to_string(), nav.to_string());
    }

    #[test]
    fn test_screen_not_open_message() {
        let err = PortalError::screen_not_open(ScreenId::Attendance);
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(err.to_string(), "the Scan screen is not open");
    }
}
