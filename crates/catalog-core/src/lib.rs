//! # catalog-core
//!
//! Foundation crate for the catalog view engine.
//! Defines the product, query, cart and column models, the error types,
//! configuration, tracing setup and the store trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult};
pub use models::{
    derive_status, CartLine, CatalogStats, Column, ColumnOrder, Product, ProductDraft, ProductId,
    ProductPatch, ProductStatus, RowAction, SortDirection, SortKey, SortSpec, ViewPage, ViewQuery,
};
