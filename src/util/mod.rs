//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and display formatting from page
//! and component logic so both stay testable without a browser.

pub mod format;
pub mod storage;
