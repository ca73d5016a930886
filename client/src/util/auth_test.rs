use super::*;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), avatar_url: None }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert_eq!(auth_condition(&state), Some(false));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::restoring();
    assert!(!should_redirect_unauth(&state));
    assert_eq!(auth_condition(&state), None);
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::signed_in(ada());
    assert!(!should_redirect_unauth(&state));
    assert_eq!(auth_condition(&state), Some(true));
}

#[test]
fn sign_in_and_out_update_signal() {
    let auth = RwSignal::new(AuthState::restoring());
    sign_in(auth, ada());
    assert_eq!(auth.get_untracked(), AuthState::signed_in(ada()));
    sign_out(auth);
    assert_eq!(auth.get_untracked(), AuthState::default());
}
