use std::time::Duration;

use catalog_core::errors::{CatalogError, CatalogResult};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::version::{QueryVersion, Ticket};

/// Tokio-backed debounce.
///
/// Each [`schedule`](Self::schedule) aborts the previous pending task and
/// starts a new one that sleeps for the interval, computes, and applies the
/// result only if no newer schedule or cancel happened meanwhile. Dropping
/// the scheduler cancels pending work.
#[derive(Debug)]
pub struct DebounceScheduler {
    interval: Duration,
    version: QueryVersion,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl DebounceScheduler {
    /// Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> CatalogResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| CatalogError::SchedulerError(format!("no tokio runtime: {e}")))?;
        Ok(Self::with_handle(interval, runtime))
    }

    pub fn with_handle(interval: Duration, runtime: Handle) -> Self {
        Self {
            interval,
            version: QueryVersion::new(),
            runtime,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn version(&self) -> &QueryVersion {
        &self.version
    }

    /// Abort the pending task and start a new version. Every ticket issued
    /// before this one is stale once this returns.
    pub fn begin(&mut self) -> Ticket {
        if let Some(prev) = self.pending.take() {
            prev.abort();
        }
        self.version.bump()
    }

    /// Schedule `compute` after the quiet interval and hand its output to
    /// `apply` together with the ticket it ran under. Returns the ticket id.
    pub fn schedule<T, C, A>(&mut self, compute: C, apply: A) -> u64
    where
        T: Send + 'static,
        C: FnOnce() -> T + Send + 'static,
        A: FnOnce(T, &Ticket) + Send + 'static,
    {
        let ticket = self.begin();
        self.schedule_with(ticket, compute, apply)
    }

    /// Second half of [`schedule`](Self::schedule) for a ticket obtained
    /// from [`begin`](Self::begin).
    pub fn schedule_with<T, C, A>(&mut self, ticket: Ticket, compute: C, apply: A) -> u64
    where
        T: Send + 'static,
        C: FnOnce() -> T + Send + 'static,
        A: FnOnce(T, &Ticket) + Send + 'static,
    {
        if let Some(prev) = self.pending.take() {
            prev.abort();
        }
        let id = ticket.id();
        let interval = self.interval;
        debug!(version = id, ?interval, "recompute scheduled");

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(interval).await;
            if !ticket.is_current() {
                trace!(version = ticket.id(), "superseded before compute");
                return;
            }
            let output = compute();
            if !ticket.is_current() {
                trace!(version = ticket.id(), "stale result discarded");
                return;
            }
            apply(output, &ticket);
        }));
        id
    }

    /// Abort pending work. A computation already running finishes but its
    /// result is discarded.
    pub fn cancel(&mut self) {
        self.version.bump();
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("pending recompute cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
