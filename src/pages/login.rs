//! Login page with username + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            error.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                let session = crate::app::with_runtime(|runtime| runtime.session.clone());
                match session.login(&username_value, &password_value).await {
                    Ok(user) => {
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        error.set("Login failed. Please check your username and password.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, &submit_navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"AgriSync"</h2>
                <p class="login-card__subtitle">"Welcome back! Please sign in."</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="e.g., johndoe"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <button
                        class="login-link"
                        on:click=move |_| navigate("/register", NavigateOptions::default())
                    >
                        "Sign Up"
                    </button>
                </p>
            </div>
        </div>
    }
}
