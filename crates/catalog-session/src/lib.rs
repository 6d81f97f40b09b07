//! # catalog-session
//!
//! One view instance: owns the store, cart, query and column order, and
//! recomputes the visible page behind a debounce.

pub mod debounce;
mod session;
mod state;

pub use debounce::{DebounceScheduler, DebounceTimer, QueryVersion, Ticket};
pub use session::CatalogSession;
pub use state::{ActionOutcome, ViewState};
