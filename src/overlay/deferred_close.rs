//! Cancellable deadline for closing the overlay after focus loss

use std::time::{Duration, Instant};

/// Delay between focus loss and the overlay closing.
///
/// Must outlast the gap between a pointer press on a suggestion and the
/// click being delivered, so clicking a suggestion still commits it.
pub const DEFAULT_BLUR_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// A single scheduled close, polled by the event loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeferredClose {
    deadline: Option<Instant>,
}

impl DeferredClose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a close `delay` after `now`, replacing any earlier schedule
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending close, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the schedule if its deadline has passed.
    ///
    /// Returns true exactly once per schedule.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
