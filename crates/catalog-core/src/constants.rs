//! Shared constants.

/// Rows per page in the product table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quiet period before a query change triggers a recompute.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Stock strictly below this (and above zero) is "Low Stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Upper bound of the product rating scale (inclusive).
pub const MAX_RATING: f64 = 5.0;

/// Default number of generated products when seeding.
pub const DEFAULT_SEED_COUNT: usize = 1000;
