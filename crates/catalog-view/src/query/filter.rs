//! Filter predicates. Each predicate is independent, so their composition is
//! order-insensitive.

use catalog_core::models::{Product, ProductStatus, ViewQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate<'q> {
    /// Case-insensitive substring match on the name. Holds the lowercased needle.
    Search(String),
    Category(&'q str),
    Status(ProductStatus),
}

impl FilterPredicate<'_> {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Search(needle) => product.name.to_lowercase().contains(needle.as_str()),
            Self::Category(category) => product.category == *category,
            Self::Status(status) => product.status == *status,
        }
    }
}

/// Predicates active for `query`. Empty search text and absent filters
/// contribute nothing.
pub fn predicates(query: &ViewQuery) -> Vec<FilterPredicate<'_>> {
    let mut out = Vec::with_capacity(3);
    if !query.search_text().is_empty() {
        out.push(FilterPredicate::Search(query.search_text().to_lowercase()));
    }
    if let Some(category) = query.category_filter() {
        out.push(FilterPredicate::Category(category));
    }
    if let Some(status) = query.status_filter() {
        out.push(FilterPredicate::Status(status));
    }
    out
}

pub fn matches_all(product: &Product, predicates: &[FilterPredicate<'_>]) -> bool {
    predicates.iter().all(|p| p.matches(product))
}

/// Matching records, in input order.
pub fn filter_products<'a>(products: &'a [Product], query: &ViewQuery) -> Vec<&'a Product> {
    let predicates = predicates(query);
    products
        .iter()
        .filter(|p| matches_all(p, &predicates))
        .collect()
}
