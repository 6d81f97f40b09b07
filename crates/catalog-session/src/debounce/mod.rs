//! Coalescing of rapid query changes into a single recompute.
//!
//! Both the tokio-driven [`DebounceScheduler`] and the caller-driven
//! [`DebounceTimer`] stamp each trigger with a [`QueryVersion`]; work started
//! under an older version is discarded.

mod scheduler;
mod timer;
mod version;

pub use scheduler::DebounceScheduler;
pub use timer::DebounceTimer;
pub use version::{QueryVersion, Ticket};
