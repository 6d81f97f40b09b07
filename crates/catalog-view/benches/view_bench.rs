//! View pipeline benchmarks over a seeded 1000-product catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use catalog_core::models::{ProductStatus, SortDirection, SortKey, SortSpec, ViewQuery};
use catalog_view::{catalog_stats, compute_view};

fn bench_unfiltered_first_page(c: &mut Criterion) {
    let catalog = test_fixtures::seeded_catalog(1000, 42);
    let query = ViewQuery::default();
    c.bench_function("compute_view_unfiltered", |b| {
        b.iter(|| compute_view(black_box(&catalog), black_box(&query)))
    });
}

fn bench_search_sort_price_desc(c: &mut Criterion) {
    let catalog = test_fixtures::seeded_catalog(1000, 42);
    let query = ViewQuery::default()
        .with_search("product 1")
        .with_sort(SortSpec::new(SortKey::Price, SortDirection::Desc));
    c.bench_function("compute_view_search_sort", |b| {
        b.iter(|| compute_view(black_box(&catalog), black_box(&query)))
    });
}

fn bench_all_filters(c: &mut Criterion) {
    let catalog = test_fixtures::seeded_catalog(1000, 42);
    let query = ViewQuery::default()
        .with_search("9")
        .with_category_filter(Some("Electronics".to_string()))
        .with_status_filter(Some(ProductStatus::InStock))
        .with_sort(SortSpec::new(SortKey::Name, SortDirection::Asc));
    c.bench_function("compute_view_all_filters", |b| {
        b.iter(|| compute_view(black_box(&catalog), black_box(&query)))
    });
}

fn bench_stats(c: &mut Criterion) {
    let catalog = test_fixtures::seeded_catalog(1000, 42);
    c.bench_function("catalog_stats_1000", |b| b.iter(|| catalog_stats(black_box(&catalog))));
}

criterion_group!(
    benches,
    bench_unfiltered_first_page,
    bench_search_sort_price_desc,
    bench_all_filters,
    bench_stats
);
criterion_main!(benches);
