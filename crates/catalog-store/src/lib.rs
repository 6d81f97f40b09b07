//! # catalog-store
//!
//! The canonical product collection. Ids are assigned monotonically and
//! never reused; snapshots are copy-on-write so a pending recompute can hold
//! one while the store keeps changing.

pub mod seed;
mod store;

pub use store::ProductStore;
