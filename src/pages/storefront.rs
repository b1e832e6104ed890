//! The single storefront view: product grid plus cart panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page rehydrates the cart from localStorage synchronously and
//! spawns the one catalog fetch. Cart mutations run through `CartStore`, which
//! persists after every dispatch.

use leptos::prelude::*;

use crate::components::cart_panel::CartPanel;
use crate::components::product_card::ProductCard;
use crate::components::store_header::StoreHeader;
use crate::config::StoreConfig;
use crate::net::types::Product;
use crate::state::cart::{CartState, CartStore};
use crate::state::catalog::CatalogState;
use crate::util::storage::{BrowserStorage, CartPersistence};

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();

    let catalog = RwSignal::new(CatalogState::default());
    let cart = RwSignal::new(CartStore::open(
        BrowserStorage,
        CartPersistence::new(config.cart_storage_key.clone()),
    ));

    #[cfg(feature = "csr")]
    {
        let source = crate::net::api::HttpCatalog::new(config.catalog_url.clone());
        leptos::task::spawn_local(async move {
            crate::state::catalog::load_catalog(&source, move |event| catalog.update(|c| c.apply(event))).await;
        });
    }

    let on_add = Callback::new(move |product: Product| cart.update(|store| store.add_to_cart(product)));
    let on_clear = Callback::new(move |()| cart.update(|store| store.clear()));

    let cart_state = Signal::derive(move || cart.with(|store| store.state().clone()));
    let total_amount = Signal::derive(move || cart_state.with(CartState::total_amount));

    view! {
        <div class="storefront">
            <StoreHeader name=config.store_name.clone() total_amount/>
            <div class="storefront__layout">
                <section class="storefront__catalog">
                    <Show
                        when=move || !catalog.with(|c| c.loading)
                        fallback=|| {
                            view! {
                                <div class="storefront__loading">
                                    <div class="storefront__spinner">"⏳"</div>
                                    <p>"Fetching products from the server..."</p>
                                </div>
                            }
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=move || catalog.with(|c| c.products.clone())
                                key=|product| product.id
                                children=move |product: Product| view! { <ProductCard product on_add/> }
                            />
                        </div>
                    </Show>
                </section>
                <CartPanel cart=cart_state on_clear/>
            </div>
        </div>
    }
}
