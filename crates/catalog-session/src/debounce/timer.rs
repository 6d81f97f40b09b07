use std::time::{Duration, Instant};

use super::version::{QueryVersion, Ticket};

/// Runtime-free debounce for hosts that run their own event loop.
///
/// The caller supplies the clock: call [`trigger`](Self::trigger) on every
/// input and [`poll`](Self::poll) on every tick. `poll` yields a ticket once
/// the input has been quiet for the interval.
#[derive(Debug)]
pub struct DebounceTimer {
    interval: Duration,
    version: QueryVersion,
    pending: Option<(Instant, Ticket)>,
}

impl DebounceTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            version: QueryVersion::new(),
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn version(&self) -> &QueryVersion {
        &self.version
    }

    /// Restart the quiet window at `now`, superseding any pending trigger.
    pub fn trigger(&mut self, now: Instant) -> u64 {
        let ticket = self.version.bump();
        let id = ticket.id();
        self.pending = Some((now + self.interval, ticket));
        id
    }

    /// The ticket to run, if the quiet window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => {
                self.pending.take().map(|(_, ticket)| ticket)
            }
            _ => None,
        }
    }

    /// Drop the pending trigger and invalidate any ticket already handed out.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.version.bump();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }
}
