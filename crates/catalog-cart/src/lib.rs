//! # catalog-cart
//!
//! Pure cart operations. Every function takes the current lines by reference
//! and returns a new collection; there is at most one line per product id.

pub mod aggregator;
mod summary;

pub use aggregator::{add_to_cart, cart_count, cart_total, decrement, increment, remove};
pub use summary::CartSummary;
