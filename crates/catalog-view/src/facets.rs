//! Option lists for the filter drop-downs.

use std::collections::HashSet;

use catalog_core::models::{Product, ProductStatus};

/// Distinct categories in first-seen order.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Distinct statuses in first-seen order.
pub fn status_options(products: &[Product]) -> Vec<ProductStatus> {
    let mut out: Vec<ProductStatus> = Vec::with_capacity(ProductStatus::ALL.len());
    for p in products {
        if !out.contains(&p.status) {
            out.push(p.status);
            if out.len() == ProductStatus::ALL.len() {
                break;
            }
        }
    }
    out
}
