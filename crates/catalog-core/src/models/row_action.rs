use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-row action in the catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    View,
    Edit,
    Delete,
    AddToCart,
}

impl RowAction {
    /// Display order of the action buttons.
    pub const ALL: [RowAction; 4] = [Self::Edit, Self::Delete, Self::View, Self::AddToCart];

    pub const fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::AddToCart => "Add to Cart",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
