//! Catalog API client.
//!
//! Client-side (csr): a real `GET` via `gloo-net`.
//! Native builds: the source reports [`StoreError::Unavailable`] since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a typed [`StoreError`]; the loader in
//! `state::catalog` decides how to degrade.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::Product;
use crate::error::StoreError;

/// Anything that can produce the product catalog.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the full product list in upstream order.
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Decode a catalog response body into products.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the body is not a JSON array of products.
pub fn decode_catalog(body: &str) -> Result<Vec<Product>, StoreError> {
    serde_json::from_str(body).map_err(StoreError::Decode)
}

/// HTTP-backed catalog pointing at a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                return Err(StoreError::Status(status));
            }
            let body = resp.text().await.map_err(|e| StoreError::Network(e.to_string()))?;
            decode_catalog(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}
