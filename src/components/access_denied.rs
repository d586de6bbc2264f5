//! In-place access-denied panel.

use leptos::prelude::*;

/// Rendered where the page would be when the current role is not admitted
/// to the route. Deliberately not a navigation: the user keeps their
/// place and the sidebar.
#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied" role="alert">
            <p class="access-denied__title">"Access Denied"</p>
            <p class="access-denied__body">"You do not have permission to view this page."</p>
        </div>
    }
}
