//! Finance page: incomes and expenses side by side.

use leptos::prelude::*;

use crate::pages::resource::ResourcePage;
use crate::pages::resources::{EXPENSES_RESOURCE, INCOMES_RESOURCE};

#[component]
pub fn FinancePage() -> impl IntoView {
    view! {
        <div class="finance-page">
            <section class="finance-page__section">
                <ResourcePage descriptor=&INCOMES_RESOURCE/>
            </section>
            <section class="finance-page__section">
                <ResourcePage descriptor=&EXPENSES_RESOURCE/>
            </section>
        </div>
    }
}
