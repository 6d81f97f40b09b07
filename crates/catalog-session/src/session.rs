use std::sync::Arc;

use catalog_cart::CartSummary;
use catalog_core::config::ViewConfig;
use catalog_core::errors::CatalogResult;
use catalog_core::models::{
    CartLine, CatalogStats, Column, ColumnOrder, Product, ProductId, ProductPatch, ProductStatus,
    RowAction, ViewQuery,
};
use catalog_core::traits::IProductStore;
use catalog_store::ProductStore;
use catalog_view::{catalog_stats, category_options, compute_view, count_matches, status_options};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::debounce::{DebounceScheduler, Ticket};
use crate::state::{ActionOutcome, ViewState};

/// Controller for one catalog view.
///
/// Every query edit replaces the query wholesale and schedules a debounced
/// recompute; store edits do the same. Subscribers see `loading == true`
/// from the edit until the matching recompute lands.
#[derive(Debug)]
pub struct CatalogSession<S: IProductStore = ProductStore> {
    store: S,
    cart: Vec<CartLine>,
    query: ViewQuery,
    columns: ColumnOrder,
    editing: Option<ProductId>,
    scheduler: DebounceScheduler,
    state: Arc<watch::Sender<ViewState>>,
}

impl<S: IProductStore> CatalogSession<S> {
    /// Build a session and compute the first page synchronously.
    /// Must be called from within a tokio runtime.
    pub fn new(store: S, config: &ViewConfig) -> CatalogResult<Self> {
        let query = config.initial_query()?;
        let scheduler = DebounceScheduler::new(config.debounce_interval())?;
        let page = compute_view(store.products(), &query);
        info!(
            products = store.len(),
            page_size = query.page_size(),
            debounce_ms = config.debounce_ms,
            "catalog session started"
        );
        let (tx, _rx) = watch::channel(ViewState {
            query: query.clone(),
            page,
            loading: false,
            version: 0,
        });
        Ok(Self {
            store,
            cart: Vec::new(),
            query,
            columns: ColumnOrder::default(),
            editing: None,
            scheduler,
            state: Arc::new(tx),
        })
    }

    // ── View state ──────────────────────────────────────────────────────

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn view_state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// The latest requested query, which may be ahead of the settled page.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cancel any pending recompute and settle the current query right away.
    pub fn recompute_now(&mut self) {
        self.scheduler.cancel();
        let page = compute_view(self.store.products(), &self.query);
        let version = self.scheduler.version().current();
        let query = self.query.clone();
        self.state.send_modify(|state| {
            *state = ViewState {
                query,
                page,
                loading: false,
                version,
            };
        });
    }

    fn schedule_recompute(&mut self) {
        // Invalidate older tasks before raising `loading`.
        let ticket = self.scheduler.begin();
        self.state.send_modify(|state| state.loading = true);

        let products = self.store.snapshot();
        let query = self.query.clone();
        let tx = Arc::clone(&self.state);
        self.scheduler.schedule_with(
            ticket,
            move || {
                let page = compute_view(&products, &query);
                (query, page)
            },
            move |(query, page), ticket: &Ticket| {
                tx.send_if_modified(|state| {
                    if !ticket.is_current() {
                        return false;
                    }
                    *state = ViewState {
                        query,
                        page,
                        loading: false,
                        version: ticket.id(),
                    };
                    true
                });
            },
        );
    }

    fn replace_query(&mut self, query: ViewQuery) {
        if query == self.query {
            return;
        }
        self.query = query;
        self.schedule_recompute();
    }

    // ── Query edits ─────────────────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        let query = self.query.clone().with_search(text).first_page();
        self.replace_query(query);
    }

    pub fn set_category_filter(&mut self, category: Option<String>) {
        let query = self.query.clone().with_category_filter(category).first_page();
        self.replace_query(query);
    }

    pub fn set_status_filter(&mut self, status: Option<ProductStatus>) {
        let query = self.query.clone().with_status_filter(status).first_page();
        self.replace_query(query);
    }

    /// Header click. Returns `false` for columns that cannot be sorted.
    pub fn toggle_sort(&mut self, column: Column) -> bool {
        let Some(key) = column.sort_key() else {
            return false;
        };
        let query = self.query.clone().with_sort(self.query.sort().toggled(key));
        self.replace_query(query);
        true
    }

    /// Pages past the end are allowed and render empty.
    pub fn set_page(&mut self, page_number: usize) -> CatalogResult<()> {
        let query = self.query.clone().with_page(page_number)?;
        self.replace_query(query);
        Ok(())
    }

    pub fn total_pages(&self) -> usize {
        catalog_core::models::page_count(
            count_matches(self.store.products(), &self.query),
            self.query.page_size(),
        )
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        let current = self.query.page_number();
        if current >= self.total_pages() {
            return false;
        }
        match self.query.clone().with_page(current + 1) {
            Ok(query) => {
                self.replace_query(query);
                true
            }
            Err(_) => false,
        }
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        let current = self.query.page_number();
        if current <= 1 {
            return false;
        }
        match self.query.clone().with_page(current - 1) {
            Ok(query) => {
                self.replace_query(query);
                true
            }
            Err(_) => false,
        }
    }

    // ── Row actions ─────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: RowAction, id: ProductId) -> ActionOutcome {
        debug!(%action, %id, "row action");
        match action {
            RowAction::View => match self.store.get(id) {
                Some(product) => ActionOutcome::Viewed(product.clone()),
                None => ActionOutcome::NotFound(id),
            },
            RowAction::Edit => match self.store.get(id) {
                Some(product) => {
                    let product = product.clone();
                    self.editing = Some(id);
                    ActionOutcome::Editing(product)
                }
                None => ActionOutcome::NotFound(id),
            },
            RowAction::Delete => match self.store.delete(id) {
                Some(product) => {
                    if self.editing == Some(id) {
                        self.editing = None;
                    }
                    self.schedule_recompute();
                    ActionOutcome::Deleted(product)
                }
                None => ActionOutcome::NotFound(id),
            },
            RowAction::AddToCart => match self.store.get(id) {
                Some(product) => {
                    self.cart = catalog_cart::add_to_cart(&self.cart, product);
                    match self.cart.iter().find(|l| l.product_id == id) {
                        Some(line) => ActionOutcome::AddedToCart(line.clone()),
                        None => ActionOutcome::NotFound(id),
                    }
                }
                None => ActionOutcome::NotFound(id),
            },
        }
    }

    pub fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save a full record from the edit form. Unknown ids are ignored.
    pub fn save_edit(&mut self, product: Product) -> CatalogResult<bool> {
        let id = product.id;
        let saved = self.store.replace(product)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        if saved {
            self.schedule_recompute();
        }
        Ok(saved)
    }

    pub fn apply_patch(&mut self, id: ProductId, patch: &ProductPatch) -> CatalogResult<bool> {
        let updated = self.store.update(id, patch)?;
        if updated {
            self.schedule_recompute();
        }
        Ok(updated)
    }

    // ── Cart ────────────────────────────────────────────────────────────

    pub fn cart_lines(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn cart_increment(&mut self, id: ProductId) {
        self.cart = catalog_cart::increment(&self.cart, id);
    }

    pub fn cart_decrement(&mut self, id: ProductId) {
        self.cart = catalog_cart::decrement(&self.cart, id);
    }

    pub fn cart_remove(&mut self, id: ProductId) {
        self.cart = catalog_cart::remove(&self.cart, id);
    }

    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::of(&self.cart)
    }

    // ── Columns and catalog-wide figures ────────────────────────────────

    pub fn columns(&self) -> &ColumnOrder {
        &self.columns
    }

    pub fn reorder_columns(&mut self, from: usize, to: usize) {
        self.columns = catalog_core::models::reorder_columns(&self.columns, from, to);
    }

    pub fn stats(&self) -> CatalogStats {
        catalog_stats(self.store.products())
    }

    pub fn category_options(&self) -> Vec<String> {
        category_options(self.store.products())
    }

    pub fn status_options(&self) -> Vec<ProductStatus> {
        status_options(self.store.products())
    }
}
