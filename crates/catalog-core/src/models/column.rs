//! Display columns and their user-controlled order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::view_query::SortKey;
use crate::errors::ColumnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Image,
    Name,
    Category,
    Price,
    Stock,
    Status,
    Actions,
}

impl Column {
    /// Default left-to-right order.
    pub const ALL: [Column; 8] = [
        Self::Id,
        Self::Image,
        Self::Name,
        Self::Category,
        Self::Price,
        Self::Stock,
        Self::Status,
        Self::Actions,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Image => "Image",
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Stock => "Stock",
            Self::Status => "Status",
            Self::Actions => "Actions",
        }
    }

    /// `None` for columns that cannot be sorted on.
    pub const fn sort_key(self) -> Option<SortKey> {
        match self {
            Self::Id => Some(SortKey::Id),
            Self::Name => Some(SortKey::Name),
            Self::Category => Some(SortKey::Category),
            Self::Price => Some(SortKey::Price),
            Self::Stock => Some(SortKey::Stock),
            Self::Status => Some(SortKey::Status),
            Self::Image | Self::Actions => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A permutation of [`Column::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct ColumnOrder(Vec<Column>);

impl Default for ColumnOrder {
    fn default() -> Self {
        Self(Column::ALL.to_vec())
    }
}

impl ColumnOrder {
    pub fn as_slice(&self) -> &[Column] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().copied()
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.0.iter().position(|c| *c == column)
    }

    /// Move the column at `from` to `to`. Either index out of bounds leaves
    /// the order unchanged.
    pub fn reordered(&self, from: usize, to: usize) -> Self {
        let len = self.0.len();
        if from >= len || to >= len {
            return self.clone();
        }
        let mut columns = self.0.clone();
        let column = columns.remove(from);
        columns.insert(to, column);
        Self(columns)
    }
}

impl TryFrom<Vec<Column>> for ColumnOrder {
    type Error = ColumnError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        if columns.len() != Column::ALL.len() {
            return Err(ColumnError::WrongLength {
                expected: Column::ALL.len(),
                found: columns.len(),
            });
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(ColumnError::Duplicate(*column));
            }
        }
        Ok(Self(columns))
    }
}

impl From<ColumnOrder> for Vec<Column> {
    fn from(order: ColumnOrder) -> Self {
        order.0
    }
}

/// Pure reorder: `order` is left as is and a new order is returned.
pub fn reorder_columns(order: &ColumnOrder, from: usize, to: usize) -> ColumnOrder {
    order.reordered(from, to)
}
