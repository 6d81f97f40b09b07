use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic trigger counter shared between the trigger side and in-flight work.
#[derive(Debug, Clone, Default)]
pub struct QueryVersion(Arc<AtomicU64>);

impl QueryVersion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new version and return a ticket for it. Every outstanding
    /// ticket becomes stale.
    pub fn bump(&self) -> Ticket {
        let id = self.0.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket {
            version: self.clone(),
            id,
        }
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }
}

/// Proof of the version a piece of work was started under.
#[derive(Debug, Clone)]
pub struct Ticket {
    version: QueryVersion,
    id: u64,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// No newer trigger has happened since this ticket was issued.
    pub fn is_current(&self) -> bool {
        self.version.current() == self.id
    }
}
