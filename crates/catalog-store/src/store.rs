use std::sync::Arc;

use catalog_core::errors::ProductError;
use catalog_core::models::{derive_status, Product, ProductDraft, ProductId, ProductPatch};
use catalog_core::traits::IProductStore;
use tracing::{debug, warn};

/// In-memory product store.
#[derive(Debug, Clone)]
pub struct ProductStore {
    records: Arc<Vec<Product>>,
    next_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            next_id: 1,
        }
    }

    /// Build a store from drafts, assigning ids `1..=n` in order.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = ProductDraft>,
    ) -> Result<Self, ProductError> {
        let mut store = Self::new();
        for draft in drafts {
            store.create(draft)?;
        }
        Ok(store)
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> ProductId {
        ProductId(self.next_id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.records.iter().position(|p| p.id == id)
    }
}

impl IProductStore for ProductStore {
    fn create(&mut self, draft: ProductDraft) -> Result<ProductId, ProductError> {
        if let Err(err) = draft.validate() {
            warn!(error = %err, name = %draft.name, "rejected product draft");
            return Err(err);
        }
        let id = ProductId(self.next_id);
        self.next_id += 1;
        let product = Product {
            id,
            status: derive_status(draft.stock),
            name: draft.name,
            category: draft.category,
            brand: draft.brand,
            price: draft.price,
            stock: draft.stock,
            description: draft.description,
            rating: draft.rating,
            image_ref: draft.image_ref,
        };
        Arc::make_mut(&mut self.records).push(product);
        debug!(%id, "product created");
        Ok(id)
    }

    fn get(&self, id: ProductId) -> Option<&Product> {
        self.records.iter().find(|p| p.id == id)
    }

    fn update(&mut self, id: ProductId, patch: &ProductPatch) -> Result<bool, ProductError> {
        if let Err(err) = patch.validate() {
            warn!(%id, error = %err, "rejected product patch");
            return Err(err);
        }
        let Some(idx) = self.position(id) else {
            debug!(%id, "update of unknown product ignored");
            return Ok(false);
        };
        patch.apply_to(&mut Arc::make_mut(&mut self.records)[idx]);
        debug!(%id, "product updated");
        Ok(true)
    }

    fn replace(&mut self, product: Product) -> Result<bool, ProductError> {
        if let Err(err) = product.validate() {
            warn!(id = %product.id, error = %err, "rejected product save");
            return Err(err);
        }
        let Some(idx) = self.position(product.id) else {
            debug!(id = %product.id, "save of unknown product ignored");
            return Ok(false);
        };
        Arc::make_mut(&mut self.records)[idx] = product;
        Ok(true)
    }

    fn delete(&mut self, id: ProductId) -> Option<Product> {
        let idx = self.position(id)?;
        let removed = Arc::make_mut(&mut self.records).remove(idx);
        debug!(%id, "product deleted");
        Some(removed)
    }

    fn products(&self) -> &[Product] {
        &self.records
    }

    fn snapshot(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.records)
    }
}
