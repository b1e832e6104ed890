//! Reusable UI components for the storefront page.
//!
//! ARCHITECTURE
//! ============
//! Components receive signals and callbacks as props and own no state, so the
//! page stays the single owner of catalog and cart data.

pub mod cart_panel;
pub mod product_card;
pub mod store_header;
