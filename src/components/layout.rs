//! Authenticated app chrome: sidebar nav, header, content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar is driven by the config's nav table filtered by the
//! current role, so the layout and the route guard always agree about
//! which screens a role may reach.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

/// App shell around every authenticated page.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let location = use_location();

    let current_route = move || route_from_path(&location.pathname.get());

    let nav_config = config.clone();
    let nav_items = move || {
        let Some(user) = auth.get().user else {
            return Vec::new();
        };
        nav_config
            .visible_nav_items(user.role)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::app::with_runtime(|runtime| runtime.session.logout());
        }
        auth.set(AuthState {
            user: None,
            loading: false,
        });
    };

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">
                    <h1 class="sidebar__title">"AgriSync"</h1>
                </div>
                <nav class="sidebar__nav">
                    {move || {
                        let active = current_route();
                        nav_items()
                            .into_iter()
                            .map(|item| {
                                let navigate = navigate.clone();
                                let path = item.path();
                                let is_active = item.route == active;
                                view! {
                                    <button
                                        class="sidebar__link"
                                        class=("sidebar__link--active", is_active)
                                        on:click=move |_| navigate(&path, NavigateOptions::default())
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="sidebar__footer">
                    <div class="sidebar__user">
                        <span class="sidebar__avatar">
                            {move || initials(auth.get().user.map(|u| u.username).as_deref().unwrap_or(""))}
                        </span>
                        <span class="sidebar__identity">
                            <span class="sidebar__username">
                                {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
                            </span>
                            <span class="sidebar__role">
                                {move || auth.get().user.map(|u| u.role.as_str()).unwrap_or_default()}
                            </span>
                        </span>
                    </div>
                    <button class="sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="app-main">
                <header class="app-main__header">
                    <h2 class="app-main__title">{move || title_for_route(&current_route())}</h2>
                </header>
                <div class="app-main__content">{children()}</div>
            </main>
        </div>
    }
}

/// Route identifier from a location pathname.
fn route_from_path(pathname: &str) -> String {
    let route = pathname.trim_matches('/');
    if route.is_empty() {
        "dashboard".to_owned()
    } else {
        route.to_owned()
    }
}

/// Header title: underscores to spaces, each word capitalized.
fn title_for_route(route: &str) -> String {
    route
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Avatar initials for a username: first letters of the first and last
/// words, or the first two characters of a single word.
fn initials(username: &str) -> String {
    if username.is_empty() {
        return "?".to_owned();
    }
    let words: Vec<&str> = username.split_whitespace().collect();
    if words.len() > 1 {
        let mut out = String::new();
        out.extend(words[0].chars().next().map(|c| c.to_ascii_uppercase()));
        out.extend(words[words.len() - 1].chars().next().map(|c| c.to_ascii_uppercase()));
        out
    } else {
        username.chars().take(2).collect::<String>().to_uppercase()
    }
}
