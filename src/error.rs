//! Error type shared by the catalog loader and the cart persistence bridge.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors reach the user. Callers log them and fall back to an
//! empty catalog or an empty cart, so the page keeps rendering.

/// Failure while fetching, decoding, or persisting storefront data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request could not be sent or its body could not be read.
    #[error("network request failed: {0}")]
    Network(String),
    /// The catalog endpoint answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(u16),
    /// A JSON payload (catalog body or cart snapshot) did not parse.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
    /// A cart snapshot could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
    /// The storage primitive rejected a read, write, or delete.
    #[error("storage operation failed: {0}")]
    Storage(String),
    /// A browser facility (window, localStorage, fetch) is not present.
    #[error("not available outside the browser")]
    Unavailable,
}
