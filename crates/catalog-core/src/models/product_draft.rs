//! Creation and edit payloads for product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{validate_fields, validate_price, validate_rating, Product, ProductStatus};
use crate::errors::ProductError;

/// Everything needed to create a product; the store assigns `id` and derives `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: Decimal,
    pub stock: u32,
    pub description: String,
    pub rating: f64,
    pub image_ref: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price, self.rating)
    }
}

/// Partial update. `None` leaves the field unchanged.
///
/// `status` is independently editable; changing `stock` never re-derives it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub image_ref: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ProductError::EmptyName);
            }
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    /// Apply the patch in place. The record's `id` is never touched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(category) = &self.category {
            product.category.clone_from(category);
        }
        if let Some(brand) = &self.brand {
            product.brand.clone_from(brand);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(description) = &self.description {
            product.description.clone_from(description);
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(image_ref) = &self.image_ref {
            product.image_ref.clone_from(image_ref);
        }
    }
}
