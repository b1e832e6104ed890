//! Cart sidebar: line items, item-count badge, and the clear action.

use leptos::prelude::*;

use crate::state::cart::{CartItem, CartState};
use crate::util::format::{format_currency, format_item_count, format_line_quantity};

#[component]
pub fn CartPanel(#[prop(into)] cart: Signal<CartState>, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <aside class="cart-panel">
            <h3 class="cart-panel__heading">
                "🛒 My Cart"
                <span class="cart-panel__badge">{move || format_item_count(cart.with(CartState::total_count))}</span>
            </h3>
            <Show
                when=move || !cart.with(CartState::is_empty)
                fallback=|| view! { <p class="cart-panel__empty">"Your cart is empty..."</p> }
            >
                <ul class="cart-panel__items">
                    // qty is part of the key so a repeat add re-renders the row.
                    <For
                        each=move || cart.with(|c| c.items().to_vec())
                        key=|item| (item.product.id, item.qty)
                        children=|item: CartItem| {
                            let quantity = format_line_quantity(item.qty, item.product.price);
                            let line_total = format_currency(item.line_total());
                            view! {
                                <li class="cart-panel__item">
                                    <div class="cart-panel__item-info">
                                        <p class="cart-panel__item-title">{item.product.title}</p>
                                        <p class="cart-panel__item-qty">{quantity}</p>
                                    </div>
                                    <div class="cart-panel__item-total">{line_total}</div>
                                </li>
                            }
                        }
                    />
                </ul>
                <button class="btn cart-panel__clear" on:click=move |_| on_clear.run(())>
                    "Clear Cart"
                </button>
            </Show>
        </aside>
    }
}
