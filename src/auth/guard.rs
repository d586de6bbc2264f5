//! Role- and auth-state-based route admission.
//!
//! DESIGN
//! ======
//! A pure decision table over the current auth status and a requested
//! route. The public route set and per-route allowed roles come from
//! configuration, never from the decision logic. Access denial is a
//! render-in-place outcome, not a navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::HashMap;

use crate::auth::claims::Role;
use crate::config::ClientConfig;

/// Current authentication state as seen by the router.
///
/// `Loading` until the persisted token has been decoded once; the machine
/// runs for the process lifetime, re-entering `Unauthenticated` after any
/// logout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated(Role),
}

/// Admission outcome for one navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
    /// Render an access-denied state in place instead of navigating away.
    AccessDenied,
}

/// Route admission rules.
pub struct RouteGuard {
    public_routes: Vec<String>,
    allowed_roles: HashMap<String, Vec<Role>>,
}

impl RouteGuard {
    pub fn new(public_routes: Vec<String>, allowed_roles: HashMap<String, Vec<Role>>) -> Self {
        Self {
            public_routes,
            allowed_roles,
        }
    }

    /// Build the guard from the client configuration's route tables.
    pub fn from_config(config: &ClientConfig) -> Self {
        let allowed_roles = config
            .nav_items
            .iter()
            .map(|item| (item.route.to_owned(), item.roles.to_vec()))
            .collect();
        Self::new(config.public_routes.clone(), allowed_roles)
    }

    /// Decide admission for `route` under `status`.
    ///
    /// Returns `None` while auth state is still loading: no redirect may
    /// be issued yet and the navigation request is deferred.
    pub fn decide(&self, status: AuthStatus, route: &str) -> Option<RouteDecision> {
        match status {
            AuthStatus::Loading => None,
            AuthStatus::Unauthenticated => Some(if self.is_public(route) {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToLogin
            }),
            AuthStatus::Authenticated(role) => Some(if self.is_public(route) {
                RouteDecision::RedirectToDashboard
            } else {
                match self.allowed_roles.get(route) {
                    Some(roles) if !roles.contains(&role) => RouteDecision::AccessDenied,
                    // Routes without an explicit role table admit any
                    // authenticated user.
                    _ => RouteDecision::Allow,
                }
            }),
        }
    }

    fn is_public(&self, route: &str) -> bool {
        self.public_routes.iter().any(|public| public == route)
    }
}
