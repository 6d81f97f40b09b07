//! # catalog-view
//!
//! Turns the product collection plus a [`ViewQuery`](catalog_core::ViewQuery)
//! into the page of records to render. Everything here is a pure function of
//! its inputs.

pub mod facets;
pub mod query;
pub mod stats;

pub use facets::{category_options, status_options};
pub use query::{compute_view, count_matches};
pub use stats::catalog_stats;
