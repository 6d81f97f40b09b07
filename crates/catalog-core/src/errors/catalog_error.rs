use super::{ColumnError, ProductError, QueryError};

/// Top-level error type for the catalog engine.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("invalid product: {0}")]
    Product(#[from] ProductError),

    #[error("invalid column order: {0}")]
    Column(#[from] ColumnError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("scheduler error: {0}")]
    SchedulerError(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Convenience type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;
