use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_auth());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn restoring_state_is_loading_without_user() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_auth());
}

#[test]
fn signed_in_state_is_authenticated() {
    let state = AuthState::signed_in(User { id: "u1".to_owned(), name: "Ada".to_owned(), avatar_url: None });
    assert!(state.is_auth());
    assert!(!state.loading);
}
