//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. Held in an `RwSignal` provided
//! via context; mirrors the session core rather than owning any tokens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::guard::AuthStatus;
use crate::auth::session::SessionUser;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the persisted token (if any) has been
/// decoded once after startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// The guard-facing view of this state.
    pub fn status(&self) -> AuthStatus {
        if self.loading {
            AuthStatus::Loading
        } else {
            match &self.user {
                Some(user) => AuthStatus::Authenticated(user.role),
                None => AuthStatus::Unauthenticated,
            }
        }
    }
}
