//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// `localStorage` key holding the signed-in user between reloads.
pub const SESSION_STORAGE_KEY: &str = "project_dashboard_session";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial app state: the stored session has not been read yet.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn is_auth(&self) -> bool {
        self.user.is_some()
    }
}
