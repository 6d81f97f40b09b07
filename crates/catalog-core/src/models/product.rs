//! Product records and stock status.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{LOW_STOCK_THRESHOLD, MAX_RATING};
use crate::errors::ProductError;

/// Store-assigned product identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability label shown in the status column.
///
/// Variant order matches the lexicographic order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::InStock, Self::LowStock, Self::OutOfStock];

    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// Status for a freshly created record with the given stock level.
    pub const fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            Self::LowStock
        } else {
            Self::InStock
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive a status from stock. Only applied when a record is created;
/// later stock edits leave the status untouched.
pub const fn derive_status(stock: u32) -> ProductStatus {
    ProductStatus::from_stock(stock)
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: Decimal,
    pub stock: u32,
    pub status: ProductStatus,
    pub description: String,
    /// 0.0 ..= 5.0
    pub rating: f64,
    pub image_ref: String,
}

impl Product {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price, self.rating)
    }
}

pub(crate) fn validate_fields(name: &str, price: Decimal, rating: f64) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    validate_price(price)?;
    validate_rating(rating)
}

pub(crate) fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}

pub(crate) fn validate_rating(rating: f64) -> Result<(), ProductError> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ProductError::RatingOutOfRange(rating));
    }
    Ok(())
}
