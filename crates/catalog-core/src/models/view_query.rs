//! The user's filtering, sorting and paging intent.

use serde::{Deserialize, Serialize};

use super::product::ProductStatus;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::QueryError;

/// Field a view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Category,
    Brand,
    Price,
    Stock,
    Status,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click semantics: the active key while ascending flips to
    /// descending, anything else selects `key` ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Asc {
            Self::new(key, SortDirection::Desc)
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }
}

/// Wire form of a [`ViewQuery`]. Every field is optional on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewQueryParams {
    pub search_text: String,
    pub category_filter: Option<String>,
    pub status_filter: Option<ProductStatus>,
    pub sort: SortSpec,
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for ViewQueryParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category_filter: None,
            status_filter: None,
            sort: SortSpec::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Immutable snapshot of view parameters.
///
/// Construction validates `page_number >= 1` and `page_size >= 1`, so a
/// `ViewQuery` in hand is always usable by the view engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewQueryParams", into = "ViewQueryParams")]
pub struct ViewQuery {
    search_text: String,
    category_filter: Option<String>,
    status_filter: Option<ProductStatus>,
    sort: SortSpec,
    page_number: usize,
    page_size: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category_filter: None,
            status_filter: None,
            sort: SortSpec::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewQuery {
    /// First page of an unfiltered view with the given page size.
    pub fn new(page_size: usize) -> Result<Self, QueryError> {
        Self::default().with_page_size(page_size)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    pub fn status_filter(&self) -> Option<ProductStatus> {
        self.status_filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record on the current page.
    pub fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// An empty category is the same as no filter.
    pub fn with_category_filter(mut self, category: Option<String>) -> Self {
        self.category_filter = category.filter(|c| !c.is_empty());
        self
    }

    pub fn with_status_filter(mut self, status: Option<ProductStatus>) -> Self {
        self.status_filter = status;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Back to page 1. Used whenever the filtered set changes.
    pub fn first_page(mut self) -> Self {
        self.page_number = 1;
        self
    }

    pub fn with_page(mut self, page_number: usize) -> Result<Self, QueryError> {
        if page_number == 0 {
            return Err(QueryError::InvalidPageNumber(page_number));
        }
        self.page_number = page_number;
        Ok(self)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, QueryError> {
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self)
    }
}

impl TryFrom<ViewQueryParams> for ViewQuery {
    type Error = QueryError;

    fn try_from(params: ViewQueryParams) -> Result<Self, Self::Error> {
        Ok(ViewQuery::default()
            .with_search(params.search_text)
            .with_category_filter(params.category_filter)
            .with_status_filter(params.status_filter)
            .with_sort(params.sort)
            .with_page_size(params.page_size)?
            .with_page(params.page_number)?)
    }
}

impl From<ViewQuery> for ViewQueryParams {
    fn from(query: ViewQuery) -> Self {
        Self {
            search_text: query.search_text,
            category_filter: query.category_filter,
            status_filter: query.status_filter,
            sort: query.sort,
            page_number: query.page_number,
            page_size: query.page_size,
        }
    }
}
