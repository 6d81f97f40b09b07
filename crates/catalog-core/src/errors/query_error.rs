/// Invariant violations rejected when a `ViewQuery` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    #[error("page number is 1-based, got {0}")]
    InvalidPageNumber(usize),
}
