use catalog_core::models::{CartLine, Product, ProductId, ViewPage, ViewQuery};
use serde::{Deserialize, Serialize};

/// What subscribers render: the last settled page and whether a newer
/// recompute is pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Query the page was computed for.
    pub query: ViewQuery,
    pub page: ViewPage,
    pub loading: bool,
    /// Version of the recompute that produced `page`; 0 for the initial page.
    pub version: u64,
}

/// Result of dispatching a row action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Viewed(Product),
    /// The product is now the session's edit target.
    Editing(Product),
    Deleted(Product),
    AddedToCart(CartLine),
    NotFound(ProductId),
}
