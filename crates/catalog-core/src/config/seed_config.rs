//! Mock catalog generation settings.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEED_COUNT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub product_count: usize,
    /// Fixed RNG seed for reproducible catalogs. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub min_price_cents: u64,
    pub max_price_cents: u64,
    pub max_stock: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            product_count: DEFAULT_SEED_COUNT,
            rng_seed: None,
            categories: ["Sports", "Electronics", "Clothing", "Toys", "Home"]
                .map(String::from)
                .to_vec(),
            brands: ["Sportify", "FitLife", "TechGear", "Clothify", "HomePro"]
                .map(String::from)
                .to_vec(),
            min_price_cents: 5_000,
            max_price_cents: 55_000,
            max_stock: 99,
        }
    }
}
