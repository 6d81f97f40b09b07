//! Property tests for the view pipeline.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use catalog_core::models::{
    derive_status, Product, ProductId, ProductStatus, SortDirection, SortKey, SortSpec, ViewQuery,
};
use catalog_view::query::filter::{matches_all, predicates};
use catalog_view::query::{compare_by, filter_products};
use catalog_view::{compute_view, count_matches};

const NAMES: [&str; 6] = ["Red Shoe", "blue shoe", "Lamp", "Shoe Rack", "Ball", "lamp shade"];
const CATEGORIES: [&str; 3] = ["Sports", "Home", "Toys"];
const SEARCHES: [&str; 5] = ["", "shoe", "LAMP", "a", "zzz"];
const KEYS: [SortKey; 8] = [
    SortKey::Id,
    SortKey::Name,
    SortKey::Category,
    SortKey::Brand,
    SortKey::Price,
    SortKey::Stock,
    SortKey::Status,
    SortKey::Rating,
];

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0..NAMES.len(), 0..CATEGORIES.len(), 0i64..5, 0u32..15, 0u8..=5), 0..40)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, category, price, stock, rating))| Product {
                    id: ProductId(i as u64 + 1),
                    name: NAMES[name].to_string(),
                    category: CATEGORIES[category].to_string(),
                    brand: "Brand".to_string(),
                    price: Decimal::from(price * 10),
                    stock,
                    status: derive_status(stock),
                    description: String::new(),
                    rating: f64::from(rating),
                    image_ref: String::new(),
                })
                .collect()
        })
}

fn query_strategy() -> impl Strategy<Value = ViewQuery> {
    (
        0..SEARCHES.len(),
        prop::option::of(0..CATEGORIES.len()),
        prop::option::of(0..ProductStatus::ALL.len()),
        0..KEYS.len(),
        any::<bool>(),
        1usize..6,
        1usize..8,
    )
        .prop_map(|(search, category, status, key, desc, page, size)| {
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            ViewQuery::new(size)
                .and_then(|q| q.with_page(page))
                .map(|q| {
                    q.with_search(SEARCHES[search])
                        .with_category_filter(category.map(|c| CATEGORIES[c].to_string()))
                        .with_status_filter(status.map(|s| ProductStatus::ALL[s]))
                        .with_sort(SortSpec::new(KEYS[key], direction))
                })
                .unwrap()
        })
}

proptest! {
    #[test]
    fn prop_page_bounds(catalog in catalog_strategy(), query in query_strategy()) {
        let page = compute_view(&catalog, &query);
        prop_assert!(page.total_count >= page.items.len());
        prop_assert!(page.items.len() <= query.page_size());
        prop_assert_eq!(page.total_count, count_matches(&catalog, &query));
    }
}

proptest! {
    #[test]
    fn prop_filter_order_is_irrelevant(catalog in catalog_strategy(), query in query_strategy()) {
        let preds = predicates(&query);
        let mut reversed = preds.clone();
        reversed.reverse();

        let forward: BTreeSet<ProductId> = filter_products(&catalog, &query).iter().map(|p| p.id).collect();
        let backward: BTreeSet<ProductId> = catalog
            .iter()
            .filter(|p| matches_all(p, &reversed))
            .map(|p| p.id)
            .collect();
        // Applying one predicate at a time, in reverse, yields the same set.
        let mut staged: Vec<&Product> = catalog.iter().collect();
        for pred in &reversed {
            staged.retain(|p| pred.matches(p));
        }
        let staged: BTreeSet<ProductId> = staged.iter().map(|p| p.id).collect();

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&forward, &staged);
    }
}

proptest! {
    #[test]
    fn prop_sort_is_stable(catalog in catalog_strategy(), query in query_strategy()) {
        let query = query.with_page_size(catalog.len().max(1)).unwrap().with_page(1).unwrap();
        let page = compute_view(&catalog, &query);
        let key = query.sort().key;
        for pair in page.items.windows(2) {
            let ord = compare_by(key, &pair[0], &pair[1]);
            match query.sort().direction {
                SortDirection::Asc => prop_assert!(ord.is_le()),
                SortDirection::Desc => prop_assert!(ord.is_ge()),
            }
            if ord.is_eq() {
                // Ids follow input order, so ties must stay ascending by id.
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_pages_cover_all_matches_once(catalog in catalog_strategy(), query in query_strategy()) {
        let total = count_matches(&catalog, &query);
        let pages = total.div_ceil(query.page_size());
        let mut seen = Vec::new();
        for n in 1..=pages + 1 {
            let q = query.clone().with_page(n).unwrap();
            seen.extend(compute_view(&catalog, &q).ids());
        }
        let unique: BTreeSet<_> = seen.iter().copied().collect();
        prop_assert_eq!(seen.len(), total);
        prop_assert_eq!(unique.len(), total);
    }
}
