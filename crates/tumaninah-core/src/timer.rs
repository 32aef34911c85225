//! Fire-once timers on a virtual clock.
//!
//! The [`Scheduler`] never reads the wall clock: the host advances it
//! explicitly with [`Scheduler::advance`], which returns the payloads of the
//! timers that came due, in due order. Every timer fires at most once and can
//! be cancelled until it does.

use tracing::trace;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug)]
struct Pending<M> {
    id: TimerId,
    due_ms: u64,
    payload: M,
}

/// Fire-once timer queue driven by a virtual clock.
#[derive(Debug)]
pub struct Scheduler<M> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending<M>>,
}

impl<M> Default for Scheduler<M> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<M> Scheduler<M> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `payload` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, payload: M) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_ms = self.now_ms.saturating_add(delay_ms);
        trace!(timer = id.0, due_ms, "timer scheduled");
        self.pending.push(Pending {
            id,
            due_ms,
            payload,
        });
        id
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let removed = self.pending.len() != before;
        if removed {
            trace!(timer = id.0, "timer cancelled");
        }
        removed
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            trace!(dropped, "all timers cancelled");
        }
        dropped
    }

    /// Check whether a timer is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Milliseconds until the next timer is due, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|p| p.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    /// Advance the clock and return the payloads of every timer now due.
    ///
    /// Payloads come out ordered by due time, ties broken by scheduling order.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<M> {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        let now = self.now_ms;

        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due_ms <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due_ms, p.id));
        if !due.is_empty() {
            trace!(fired = due.len(), now_ms = now, "timers fired");
        }
        due.into_iter().map(|p| p.payload).collect()
    }
}
