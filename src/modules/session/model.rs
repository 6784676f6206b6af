//! Session data.
//!
//! A [`Session`] holds at most one [`User`]. Being authenticated *is* having
//! a user, so the two can never disagree.

use edupro_core::UserRole;
use edupro_models::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Role of the bound user, `None` while logged out.
    pub fn role(&self) -> Option<UserRole> {
        self.current_user.as_ref().map(|user| user.role)
    }

    pub(crate) fn bind(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub(crate) fn clear(&mut self) -> Option<User> {
        self.current_user.take()
    }

    pub(crate) fn current_user_mut(&mut self) -> Option<&mut User> {
        self.current_user.as_mut()
    }
}
