//! Repeating clock timer on the tokio runtime.
//!
//! Each timer is one spawned task that posts a tick to the UI thread every
//! period. Cancelling the handle aborts the task; the task also ends by itself
//! once the tick receiver is gone.

use crate::UiEvent;

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use feeds_client_core::{CoreError, CoreResult, TickScheduler, TimerHandle};
use tao::event_loop::EventLoopProxy;
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::debug;

/// Destination for timer ticks.
pub trait TickSink: Clone + Send + 'static {
    /// Deliver one tick. Returns `false` once the receiver has gone away.
    fn post_tick(&self) -> bool;
}

impl TickSink for EventLoopProxy<UiEvent> {
    fn post_tick(&self) -> bool {
        self.send_event(UiEvent::Tick).is_ok()
    }
}

/// [`TickScheduler`] backed by tokio interval tasks.
pub struct TokioTickScheduler<K: TickSink> {
    runtime: Handle,
    sink: K,
}

/// Running tokio timer task.
pub struct TokioTimerHandle {
    pub(crate) task: JoinHandle<()>,
}

impl<K: TickSink> TokioTickScheduler<K> {
    /// Scheduler spawning onto `runtime` and posting ticks to `sink`.
    pub fn new(runtime: Handle, sink: K) -> Self {
        Self { runtime, sink }
    }
}

impl<K: TickSink> TickScheduler for TokioTickScheduler<K> {
    type Handle = TokioTimerHandle;

    #[track_caller]
    fn schedule_repeating(&mut self, period: Duration) -> CoreResult<TokioTimerHandle> {
        if period.is_zero() {
            return Err(CoreError::TimerSchedule {
                reason: "tick period must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let sink = self.sink.clone();
        let task = self.runtime.spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if !sink.post_tick() {
                    debug!("Tick receiver closed, timer task exiting");
                    break;
                }
            }
        });

        Ok(TokioTimerHandle { task })
    }
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(self) {
        self.task.abort();
    }
}
