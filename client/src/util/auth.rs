//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. The
//! guard is evaluated by the router before a protected view is constructed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::{AuthState, SESSION_STORAGE_KEY};
use crate::util::ui_persistence;

/// Guard condition for `ProtectedRoute`: `None` while the session is still
/// being restored, otherwise whether a user is signed in.
pub fn auth_condition(state: &AuthState) -> Option<bool> {
    if state.loading { None } else { Some(state.is_auth()) }
}

/// Whether a protected route should send the visitor to the login route.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    auth_condition(state) == Some(false)
}

/// Restore the persisted session once the app is running in the browser.
///
/// Effects do not run during SSR, so the server keeps rendering the guard
/// fallback and the first hydrated render matches it.
pub fn install_session_restore(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let user = ui_persistence::load_json::<User>(SESSION_STORAGE_KEY);
        if let Some(user) = user.as_ref() {
            log::debug!("restored session for user {}", user.id);
        }
        auth.set(AuthState { user, loading: false });
    });
}

/// Sign `user` in and persist the session.
pub fn sign_in(auth: RwSignal<AuthState>, user: User) {
    log::info!("signed in as {} ({})", user.name, user.id);
    ui_persistence::save_json(SESSION_STORAGE_KEY, &user);
    auth.set(AuthState::signed_in(user));
}

/// Clear the current session.
pub fn sign_out(auth: RwSignal<AuthState>) {
    log::info!("signed out");
    ui_persistence::remove(SESSION_STORAGE_KEY);
    auth.set(AuthState::default());
}
