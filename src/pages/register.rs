//! Registration page; creates an account, then routes to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
            role: None,
        };
        if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
            error.set("Username, email, and password are required.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                let session = crate::app::with_runtime(|runtime| runtime.session.clone());
                match session.register(&request).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        error.set(format!("Registration failed. {}", err.user_message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &submit_navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"Create your account"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "First Name (optional)"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Last Name (optional)"
                        <input
                            class="login-input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already registered? "
                    <button
                        class="login-link"
                        on:click=move |_| navigate("/login", NavigateOptions::default())
                    >
                        "Sign In"
                    </button>
                </p>
            </div>
        </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
