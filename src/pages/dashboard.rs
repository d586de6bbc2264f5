//! Dashboard page with role-aware farm statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Workers see their task
//! workload; administrators additionally see crop, field, and finance
//! totals. Everything is fetched through the authorized client.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::auth::claims::Role;
use crate::pages::resource::rows_from_response;
use crate::state::auth::AuthState;

/// Aggregated dashboard numbers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub active_tasks: usize,
    pub total_crops: usize,
    pub total_fields: usize,
    pub total_income: f64,
    pub total_expenses: f64,
}

/// Tasks not yet done.
fn count_active_tasks(rows: &[serde_json::Value]) -> usize {
    rows.iter()
        .filter(|row| row.get("status").and_then(serde_json::Value::as_str) != Some("done"))
        .count()
}

/// Sum an amount column that may arrive as numbers or decimal strings.
fn sum_amounts(rows: &[serde_json::Value], key: &str) -> f64 {
    rows.iter()
        .filter_map(|row| match row.get(key) {
            Some(serde_json::Value::Number(number)) => number.as_f64(),
            Some(serde_json::Value::String(text)) => text.parse::<f64>().ok(),
            _ => None,
        })
        .sum()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let stats = RwSignal::new(DashboardStats::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let role = user.role;
            leptos::task::spawn_local(async move {
                let api = crate::app::with_runtime(|runtime| runtime.api.clone());
                let mut next = DashboardStats::default();

                match api.request(crate::net::Method::Get, "/tasks/tasks/", None).await {
                    Ok(response) => {
                        next.active_tasks = count_active_tasks(&rows_from_response(&response.body));
                    }
                    Err(err) => {
                        if let Some(message) = crate::pages::resource::surface_error(&err) {
                            error.set(Some(format!("Failed to load dashboard. {message}")));
                        }
                    }
                }

                if role == Role::Admin {
                    if let Ok(response) = api.request(crate::net::Method::Get, "/crops/crops/", None).await {
                        next.total_crops = rows_from_response(&response.body).len();
                    }
                    if let Ok(response) = api.request(crate::net::Method::Get, "/crops/fields/", None).await {
                        next.total_fields = rows_from_response(&response.body).len();
                    }
                    if let Ok(response) = api
                        .request(crate::net::Method::Get, "/finance/incomes/", None)
                        .await
                    {
                        next.total_income = sum_amounts(&rows_from_response(&response.body), "amount");
                    }
                    if let Ok(response) = api
                        .request(crate::net::Method::Get, "/finance/expenses/", None)
                        .await
                    {
                        next.total_expenses = sum_amounts(&rows_from_response(&response.body), "amount");
                    }
                }

                stats.set(next);
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            loading.set(false);
        }
    });

    let is_admin = move || {
        auth.get()
            .user
            .map(|user| user.role == Role::Admin)
            .unwrap_or(false)
    };

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">
                {move || {
                    let name = auth.get().user.map(|user| user.username).unwrap_or_default();
                    format!("Welcome back, {name}!")
                }}
            </h1>

            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="dashboard-page__loading">"Loading statistics..."</p> }
            >
                <div class="stat-grid">
                    <StatCard label="Active Tasks" value=Signal::derive(move || stats.get().active_tasks.to_string())/>
                    <Show when=is_admin>
                        <StatCard label="Total Crops" value=Signal::derive(move || stats.get().total_crops.to_string())/>
                        <StatCard label="Total Fields" value=Signal::derive(move || stats.get().total_fields.to_string())/>
                        <StatCard
                            label="Total Income"
                            value=Signal::derive(move || format!("{:.2}", stats.get().total_income))
                        />
                        <StatCard
                            label="Total Expenses"
                            value=Signal::derive(move || format!("{:.2}", stats.get().total_expenses))
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// One labeled statistic tile.
#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__value">{move || value.get()}</p>
            <p class="stat-card__label">{label}</p>
        </div>
    }
}
