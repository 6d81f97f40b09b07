use std::collections::HashSet;

use catalog_core::models::{CatalogStats, Product, ProductStatus};

/// Header-card counters. Stock buckets follow each record's status field.
pub fn catalog_stats(products: &[Product]) -> CatalogStats {
    let categories: HashSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
    CatalogStats {
        total_products: products.len(),
        low_stock_items: products
            .iter()
            .filter(|p| p.status == ProductStatus::LowStock)
            .count(),
        out_of_stock_items: products
            .iter()
            .filter(|p| p.status == ProductStatus::OutOfStock)
            .count(),
        categories_count: categories.len(),
    }
}
