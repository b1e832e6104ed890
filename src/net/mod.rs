//! Networking modules for the external catalog service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the catalog fetch and `types` defines the product schema it
//! returns.

pub mod api;
pub mod types;
