//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split into `catalog` (fetched once, read-only) and `cart` (user
//! owned, persisted) so each can be reasoned about and tested on its own.

pub mod cart;
pub mod catalog;
