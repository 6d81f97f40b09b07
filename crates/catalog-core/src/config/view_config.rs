//! View pipeline configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_PAGE_SIZE};
use crate::errors::QueryError;
use crate::models::{SortDirection, SortKey, SortSpec, ViewQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize,
    /// Quiet interval before a recompute runs.
    pub debounce_ms: u64,
    pub default_sort_key: SortKey,
    pub default_sort_direction: SortDirection,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_sort_key: SortKey::Id,
            default_sort_direction: SortDirection::Asc,
        }
    }
}

impl ViewConfig {
    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn default_sort(&self) -> SortSpec {
        SortSpec::new(self.default_sort_key, self.default_sort_direction)
    }

    /// The query a fresh view starts from.
    pub fn initial_query(&self) -> Result<ViewQuery, QueryError> {
        Ok(ViewQuery::new(self.page_size)?.with_sort(self.default_sort()))
    }
}
