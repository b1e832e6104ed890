//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The storefront is a single view; `storefront` owns the catalog and cart
//! state and delegates rendering details to `components`.

pub mod storefront;
