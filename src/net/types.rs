//! Product records as served by the external catalog API.
//!
//! DESIGN
//! ======
//! Only the fields the storefront renders are modelled. Anything else the
//! upstream service sends (descriptions, ratings) is ignored on decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A purchasable product from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream identifier, stable across requests.
    pub id: u64,
    /// Display name.
    pub title: String,
    /// Unit price in USD.
    pub price: f64,
    /// Absolute image URL.
    pub image: String,
    /// Free-text category label.
    pub category: String,
}
