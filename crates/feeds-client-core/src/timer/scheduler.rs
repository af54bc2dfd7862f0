use crate::CoreResult;

use std::time::Duration;

/// Creates repeating timers on behalf of [`MenuTimerView`](crate::MenuTimerView).
///
/// How a tick reaches the view is up to the implementation. The binary posts
/// an event to the UI loop, tests count calls.
pub trait TickScheduler {
    /// Handle that keeps a scheduled timer alive until cancelled.
    type Handle: TimerHandle;

    /// Start a timer that fires every `period` until its handle is cancelled.
    fn schedule_repeating(&mut self, period: Duration) -> CoreResult<Self::Handle>;
}

/// Ownership of one running timer.
pub trait TimerHandle {
    /// Stop the timer. No tick is delivered after this returns.
    fn cancel(self);
}
