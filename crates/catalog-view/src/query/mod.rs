//! The view pipeline: filter, then stable sort, then paginate.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use filter::{filter_products, FilterPredicate};
pub use paginate::paginate;
pub use sort::{compare_by, sort_products};
pub use view::{compute_view, count_matches};
