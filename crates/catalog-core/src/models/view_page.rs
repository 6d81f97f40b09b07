use serde::{Deserialize, Serialize};

use super::product::Product;

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPage {
    pub items: Vec<Product>,
    /// Matching records before pagination.
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
}

impl ViewPage {
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_number,
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_count, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn ids(&self) -> Vec<super::ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }
}

/// `ceil(total / page_size)`; zero when `page_size` is zero.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
