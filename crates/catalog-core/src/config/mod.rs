pub mod observability_config;
pub mod seed_config;
pub mod view_config;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use seed_config::SeedConfig;
pub use view_config::ViewConfig;

use crate::errors::{CatalogError, CatalogResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub view: ViewConfig,
    pub seed: SeedConfig,
    pub observability: ObservabilityConfig,
}

impl CatalogConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Parse and validate in one step.
    pub fn load(toml_str: &str) -> CatalogResult<Self> {
        let config = Self::from_toml(toml_str)?;
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "rejected catalog config");
            return Err(err);
        }
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.view.page_size == 0 {
            return Err(CatalogError::ConfigError(
                "view.page_size must be at least 1".to_string(),
            ));
        }
        if self.seed.categories.is_empty() {
            return Err(CatalogError::ConfigError(
                "seed.categories must not be empty".to_string(),
            ));
        }
        if self.seed.brands.is_empty() {
            return Err(CatalogError::ConfigError(
                "seed.brands must not be empty".to_string(),
            ));
        }
        if self.seed.min_price_cents > self.seed.max_price_cents {
            return Err(CatalogError::ConfigError(format!(
                "seed.min_price_cents ({}) exceeds seed.max_price_cents ({})",
                self.seed.min_price_cents, self.seed.max_price_cents
            )));
        }
        Ok(())
    }
}
