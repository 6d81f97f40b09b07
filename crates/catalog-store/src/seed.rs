//! Mock catalog generation.

use catalog_core::config::SeedConfig;
use catalog_core::errors::ProductError;
use catalog_core::models::ProductDraft;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::info;

use crate::ProductStore;

pub const SEED_DESCRIPTION: &str =
    "High-quality product designed for performance and durability, suitable for everyone.";

pub fn image_ref(n: usize) -> String {
    format!("https://picsum.photos/seed/{n}/100/100")
}

/// Generate `config.product_count` drafts. With `rng_seed` set the output is
/// reproducible.
pub fn generate_drafts(config: &SeedConfig) -> Vec<ProductDraft> {
    match config.rng_seed {
        Some(seed) => generate_drafts_with(config, &mut StdRng::seed_from_u64(seed)),
        None => generate_drafts_with(config, &mut StdRng::from_entropy()),
    }
}

pub fn generate_drafts_with<R: Rng>(config: &SeedConfig, rng: &mut R) -> Vec<ProductDraft> {
    let lo = config.min_price_cents.min(config.max_price_cents);
    let hi = config.min_price_cents.max(config.max_price_cents);

    (1..=config.product_count)
        .map(|n| {
            let cents = rng.gen_range(lo..=hi);
            ProductDraft {
                name: format!("Product {n}"),
                category: config.categories.choose(rng).cloned().unwrap_or_default(),
                brand: config.brands.choose(rng).cloned().unwrap_or_default(),
                price: Decimal::from_i128_with_scale(i128::from(cents), 2),
                stock: rng.gen_range(0..=config.max_stock),
                description: SEED_DESCRIPTION.to_string(),
                rating: f64::from(rng.gen_range(0u8..=50)) / 10.0,
                image_ref: image_ref(n),
            }
        })
        .collect()
}

/// A store filled with a generated catalog.
pub fn seed_store(config: &SeedConfig) -> Result<ProductStore, ProductError> {
    let store = ProductStore::from_drafts(generate_drafts(config))?;
    info!(
        products = config.product_count,
        seeded = config.rng_seed.is_some(),
        "seeded product store"
    );
    Ok(store)
}
