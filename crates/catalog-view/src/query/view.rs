use catalog_core::models::{Product, ViewPage, ViewQuery};
use tracing::trace;

use super::filter::{filter_products, matches_all, predicates};
use super::paginate::paginate;
use super::sort::sort_products;

/// Compute the visible page and the total match count.
pub fn compute_view(products: &[Product], query: &ViewQuery) -> ViewPage {
    let mut matched = filter_products(products, query);
    let total_count = matched.len();
    sort_products(&mut matched, query.sort());

    let items: Vec<Product> = paginate(&matched, query.page_number(), query.page_size())
        .iter()
        .map(|p| (*p).clone())
        .collect();

    trace!(
        catalog = products.len(),
        matched = total_count,
        page = query.page_number(),
        returned = items.len(),
        "view computed"
    );

    ViewPage {
        items,
        total_count,
        page_number: query.page_number(),
        page_size: query.page_size(),
    }
}

/// Number of records matching the query's filters, ignoring sort and paging.
pub fn count_matches(products: &[Product], query: &ViewQuery) -> usize {
    let predicates = predicates(query);
    products.iter().filter(|p| matches_all(p, &predicates)).count()
}
