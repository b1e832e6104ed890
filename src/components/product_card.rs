//! Catalog grid card for a single product.
//!
//! DESIGN
//! ======
//! The card only reports the click; the page decides what adding means.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::format_price;

#[component]
pub fn ProductCard(product: Product, on_add: Callback<Product>) -> impl IntoView {
    let title = product.title.clone();
    let alt = product.title.clone();
    let image = product.image.clone();
    let category = product.category.clone();
    let price = format_price(product.price);

    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=image alt=alt/>
            </div>
            <div class="product-card__body">
                <h2 class="product-card__title">{title}</h2>
                <span class="product-card__category">{category}</span>
                <p class="product-card__price">{price}</p>
            </div>
            <button class="btn product-card__add" on:click=move |_| on_add.run(product.clone())>
                "+ Add to Cart"
            </button>
        </div>
    }
}
