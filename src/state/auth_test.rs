use super::*;
use crate::auth::claims::Role;

fn user(role: Role) -> SessionUser {
    SessionUser {
        id: 1,
        username: "joe".to_owned(),
        role,
    }
}

#[test]
fn default_state_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
    assert_eq!(state.status(), AuthStatus::Loading);
}

#[test]
fn loaded_without_user_is_unauthenticated() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn loaded_with_user_is_authenticated_with_their_role() {
    let state = AuthState {
        user: Some(user(Role::Admin)),
        loading: false,
    };
    assert_eq!(state.status(), AuthStatus::Authenticated(Role::Admin));
}

#[test]
fn loading_wins_over_a_present_user() {
    // Mid-login the user may already be set while loading is still true.
    let state = AuthState {
        user: Some(user(Role::Worker)),
        loading: true,
    };
    assert_eq!(state.status(), AuthStatus::Loading);
}
