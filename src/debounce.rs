//! Cancel-and-reschedule timer for coalescing bursts of input.
//!
//! The debouncer holds at most one pending payload. Scheduling a new one
//! replaces whatever was pending. Time is passed in by the caller, so the
//! owner decides when to [`poll`](Debouncer::poll).

use std::time::{Duration, Instant};

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    deadline: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    next_handle: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_handle: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `payload` to fire `delay` after `now`, cancelling any
    /// pending timer.
    pub fn schedule(&mut self, payload: T, now: Instant) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending = Some(Pending {
            handle,
            deadline: now + self.delay,
            payload,
        });
        handle
    }

    /// Cancel the timer if `handle` is still the pending one.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if self.pending_handle() == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel whatever is pending, returning its payload.
    pub fn cancel_pending(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.payload)
    }

    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|pending| pending.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left until the pending timer fires, zero if already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire the pending timer if its deadline has passed. Each scheduled
    /// payload fires at most once.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| deadline <= now);
        if due {
            self.cancel_pending()
        } else {
            None
        }
    }
}
