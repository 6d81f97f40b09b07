/// Product record invariants enforced at the store boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("price must be non-negative, got {0}")]
    NegativePrice(rust_decimal::Decimal),

    #[error("rating must be within 0..=5, got {0}")]
    RatingOutOfRange(f64),

    #[error("product name must not be empty")]
    EmptyName,
}
