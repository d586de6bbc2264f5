//! Route admission wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `Guarded`, which renders the page,
//! a loading shell, or the access-denied panel according to the guard's
//! decision, and issues redirects as navigation effects. Route components
//! thereby apply identical admission behavior.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{RouteDecision, RouteGuard};
use crate::state::auth::AuthState;

/// Wrap a routed page with admission checks for `route`.
#[component]
pub fn Guarded(route: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = expect_context::<Arc<RouteGuard>>();

    let decision_guard = Arc::clone(&guard);
    let decision = move || decision_guard.decide(auth.get().status(), route);

    // Redirect decisions leave the page; everything else renders in place.
    let navigate = use_navigate();
    let effect_guard = Arc::clone(&guard);
    Effect::new(move || match effect_guard.decide(auth.get().status(), route) {
        Some(RouteDecision::RedirectToLogin) => navigate("/login", NavigateOptions::default()),
        Some(RouteDecision::RedirectToDashboard) => navigate("/dashboard", NavigateOptions::default()),
        _ => {}
    });

    view! {
        {move || match decision() {
            Some(RouteDecision::Allow) => children(),
            Some(RouteDecision::AccessDenied) => {
                view! { <crate::components::access_denied::AccessDenied/> }.into_any()
            }
            // Loading (deferred) or about to redirect.
            _ => view! { <LoadingShell/> }.into_any(),
        }}
    }
}

/// Placeholder shown while auth state is loading or a redirect is pending.
#[component]
fn LoadingShell() -> impl IntoView {
    view! {
        <div class="loading-shell">
            <p class="loading-shell__text">"Loading AgriSync..."</p>
        </div>
    }
}
