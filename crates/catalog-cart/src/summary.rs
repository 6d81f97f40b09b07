use catalog_core::models::CartLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregator::{cart_count, cart_total};

/// Totals shown in the cart footer and badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub total: Decimal,
    pub item_count: u64,
    pub line_count: usize,
}

impl CartSummary {
    pub fn of(lines: &[CartLine]) -> Self {
        Self {
            total: cart_total(lines),
            item_count: cart_count(lines),
            line_count: lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}
