use crate::models::Column;

/// A column list that is not a permutation of the display columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    #[error("expected {expected} columns, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("column {0} appears more than once")]
    Duplicate(Column),
}
