use super::*;

#[test]
fn default_public_routes_are_login_and_register() {
    let config = ClientConfig::default();
    assert_eq!(config.public_routes, vec!["login", "register"]);
}

#[test]
fn workers_see_only_dashboard_and_tasks() {
    let config = ClientConfig::default();
    let routes: Vec<&str> = config
        .visible_nav_items(Role::Worker)
        .iter()
        .map(|item| item.route)
        .collect();
    assert_eq!(routes, vec!["dashboard", "tasks"]);
}

#[test]
fn admins_see_every_nav_item() {
    let config = ClientConfig::default();
    assert_eq!(config.visible_nav_items(Role::Admin).len(), config.nav_items.len());
}

#[test]
fn nav_item_path_prefixes_a_slash() {
    let config = ClientConfig::default();
    assert_eq!(config.nav_items[0].path(), "/dashboard");
}
