//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::StoreConfig;
use crate::pages::storefront::StorefrontPage;

/// Root application component.
///
/// Provides the build-time [`StoreConfig`] as context and renders the
/// storefront page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoreConfig::from_build_env();
    let title = config.store_name.clone();
    provide_context(config);

    view! {
        <Title text=title/>
        <StorefrontPage/>
    }
}
