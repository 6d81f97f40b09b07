use serde::{Deserialize, Serialize};

/// Summary counters for the dashboard header cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub categories_count: usize,
}
