//! Client configuration: API base, timeouts, and route tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guarded route set, the public route set, and the sidebar nav all
//! derive from this one table so the guard and the layout can never
//! disagree about who may see what.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::auth::claims::Role;

/// One sidebar entry and its admission rule.
#[derive(Clone, Debug)]
pub struct NavItem {
    pub label: &'static str,
    /// Route identifier, also the path segment (`/{route}`).
    pub route: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    /// Absolute path for the router.
    pub fn path(&self) -> String {
        format!("/{}", self.route)
    }
}

/// Static client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Prefix for every API path, e.g. `/api`.
    pub api_base: String,
    /// Transport timeout for a single request.
    pub request_timeout_ms: u32,
    /// Routes reachable without a session.
    pub public_routes: Vec<String>,
    /// Guarded routes with their allowed roles.
    pub nav_items: Vec<NavItem>,
}

impl ClientConfig {
    /// Nav entries visible to `role`.
    pub fn visible_nav_items(&self, role: Role) -> Vec<&NavItem> {
        self.nav_items
            .iter()
            .filter(|item| item.roles.contains(&role))
            .collect()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_owned(),
            request_timeout_ms: 15_000,
            public_routes: vec!["login".to_owned(), "register".to_owned()],
            nav_items: vec![
                NavItem {
                    label: "Dashboard",
                    route: "dashboard",
                    roles: &[Role::Admin, Role::Worker],
                },
                NavItem {
                    label: "Fields",
                    route: "fields",
                    roles: &[Role::Admin],
                },
                NavItem {
                    label: "Crops",
                    route: "crops",
                    roles: &[Role::Admin],
                },
                NavItem {
                    label: "Tasks",
                    route: "tasks",
                    roles: &[Role::Admin, Role::Worker],
                },
                NavItem {
                    label: "Finance",
                    route: "finance",
                    roles: &[Role::Admin],
                },
                NavItem {
                    label: "Inventory",
                    route: "inventory",
                    roles: &[Role::Admin],
                },
                NavItem {
                    label: "Users",
                    route: "users",
                    roles: &[Role::Admin],
                },
            ],
        }
    }
}
