use std::sync::Arc;

use crate::errors::ProductError;
use crate::models::{Product, ProductDraft, ProductId, ProductPatch};

/// Owner of the canonical product collection.
///
/// Unknown ids are never errors: lookups return `None` and mutations report
/// `false`. Only malformed field values are rejected.
pub trait IProductStore {
    /// Insert a new record. The store assigns the id and derives the status.
    fn create(&mut self, draft: ProductDraft) -> Result<ProductId, ProductError>;

    fn get(&self, id: ProductId) -> Option<&Product>;

    /// Partial update by id. Returns whether a record was changed.
    fn update(&mut self, id: ProductId, patch: &ProductPatch) -> Result<bool, ProductError>;

    /// Full-record save. `product.id` selects the record to overwrite.
    fn replace(&mut self, product: Product) -> Result<bool, ProductError>;

    /// Returns the removed record, if any.
    fn delete(&mut self, id: ProductId) -> Option<Product>;

    /// Records in insertion order.
    fn products(&self) -> &[Product];

    /// Cheap shared snapshot for work that outlives the borrow of the store.
    fn snapshot(&self) -> Arc<Vec<Product>>;

    fn len(&self) -> usize {
        self.products().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
