//! Subscriber setup for binaries and tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::{CatalogError, CatalogResult};

/// Install a global fmt subscriber. `RUST_LOG` wins over `config.log_filter`.
///
/// Returns an error if a global subscriber is already set; callers that may
/// initialise more than once (test harnesses) can ignore it.
pub fn init_tracing(config: &ObservabilityConfig) -> CatalogResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter).map_err(|e| {
            CatalogError::ConfigError(format!("invalid log filter {:?}: {e}", config.log_filter))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    result.map_err(|e| CatalogError::ConfigError(format!("tracing already initialised: {e}")))
}
