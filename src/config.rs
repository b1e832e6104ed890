//! Storefront configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled:
//! - `STOREFRONT_NAME`: header title (default `Toko Rifa Global`)
//! - `STOREFRONT_CATALOG_URL`: catalog endpoint (default Fake Store API)
//! - `STOREFRONT_CART_KEY`: localStorage key for the cart snapshot

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORE_NAME: &str = "Toko Rifa Global";
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_CART_STORAGE_KEY: &str = "keranjangRifaNext";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub store_name: String,
    pub catalog_url: String,
    pub cart_storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_owned(),
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            cart_storage_key: DEFAULT_CART_STORAGE_KEY.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Build config from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("STOREFRONT_NAME"),
            option_env!("STOREFRONT_CATALOG_URL"),
            option_env!("STOREFRONT_CART_KEY"),
        )
    }

    fn from_overrides(name: Option<&str>, catalog_url: Option<&str>, cart_key: Option<&str>) -> Self {
        Self {
            store_name: non_blank_or(name, DEFAULT_STORE_NAME),
            catalog_url: non_blank_or(catalog_url, DEFAULT_CATALOG_URL),
            cart_storage_key: non_blank_or(cart_key, DEFAULT_CART_STORAGE_KEY),
        }
    }
}

fn non_blank_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
