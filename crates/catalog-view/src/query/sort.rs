use std::cmp::Ordering;

use catalog_core::models::{Product, SortDirection, SortKey, SortSpec};

/// Natural ordering of a single field. Text compares lexicographically,
/// status by its label.
pub fn compare_by(key: SortKey, a: &Product, b: &Product) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Brand => a.brand.cmp(&b.brand),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Stock => a.stock.cmp(&b.stock),
        SortKey::Status => a.status.label().cmp(b.status.label()),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
    }
}

/// Stable single-key sort. Equal keys keep their input order in both directions.
pub fn sort_products(products: &mut [&Product], spec: SortSpec) {
    products.sort_by(|a, b| {
        let ord = compare_by(spec.key, a, b);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
