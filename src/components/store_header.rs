//! Sticky header with the store name and the running cart total.

use leptos::prelude::*;

use crate::util::format::format_currency;

#[component]
pub fn StoreHeader(#[prop(into)] name: String, #[prop(into)] total_amount: Signal<f64>) -> impl IntoView {
    view! {
        <header class="store-header">
            <h1 class="store-header__title">{name}" 🌍"</h1>
            <div class="store-header__total">
                <p class="store-header__total-label">"Total"</p>
                <p class="store-header__total-amount">{move || format_currency(total_amount.get())}</p>
            </div>
        </header>
    }
}
