//! Clock view hosted in the first entry of the status-item menu.
//!
//! The view only ticks while the menu is visible. It owns the timer handle
//! exclusively; the handle exists between `start_timer` and `stop_timer` and
//! is released when the view is dropped.

use crate::{
    CoreResult,
    timer::{ClockFace, ClockReading, TickScheduler, TimerHandle},
};

use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use chrono::{DateTime, TimeZone};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Size of the clock view in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl ViewFrame {
    /// Frame the clock view is laid out in.
    pub const CLOCK: ViewFrame = ViewFrame {
        width: 250.0,
        height: 170.0,
    };
}

struct ActiveTimer<H> {
    handle: H,
    session_id: Uuid,
    started_at: Instant,
}

/// Timer-driven clock view.
pub struct MenuTimerView<S: TickScheduler> {
    scheduler: S,
    face: ClockFace,
    period: Duration,
    active: Option<ActiveTimer<S::Handle>>,
}

impl<S: TickScheduler> MenuTimerView<S> {
    /// Create a stopped view that will tick every `period` once started.
    pub fn new(scheduler: S, face: ClockFace, period: Duration) -> Self {
        Self {
            scheduler,
            face,
            period,
            active: None,
        }
    }

    /// Start ticking.
    ///
    /// A timer that is already running is released first, so at most one
    /// handle is ever live. On scheduler failure the view stays stopped.
    #[instrument(skip(self), fields(period_ms = self.period.as_millis()))]
    pub fn start_timer(&mut self) -> CoreResult<()> {
        if let Some(previous) = &self.active {
            warn!(session_id = %previous.session_id, "Timer already running, restarting");
            self.stop_timer();
        }

        let handle = self.scheduler.schedule_repeating(self.period)?;
        let session_id = Uuid::new_v4();

        self.active = Some(ActiveTimer {
            handle,
            session_id,
            started_at: Instant::now(),
        });

        info!(session_id = %session_id, "Clock timer started");

        Ok(())
    }

    /// Stop ticking and release the timer handle.
    ///
    /// Safe to call when no timer is running.
    #[instrument(skip(self))]
    pub fn stop_timer(&mut self) {
        match self.active.take() {
            Some(active) => {
                active.handle.cancel();
                info!(
                    session_id = %active.session_id,
                    elapsed_ms = active.started_at.elapsed().as_millis(),
                    "Clock timer stopped"
                );
            }
            None => debug!("Stop requested with no timer running"),
        }
    }

    /// Whether the view is currently ticking.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Whether a timer handle is currently held.
    pub fn has_timer(&self) -> bool {
        self.active.is_some()
    }

    /// Session id of the running timer, for log correlation.
    pub fn session_id(&self) -> Option<Uuid> {
        self.active.as_ref().map(|active| active.session_id)
    }

    /// Render the view for `now`, or `None` when stopped.
    pub fn render<Tz>(&self, now: &DateTime<Tz>) -> Option<ClockReading>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.active.as_ref().map(|_| self.face.render(now))
    }

    /// Layout frame of the view.
    pub fn frame(&self) -> ViewFrame {
        ViewFrame::CLOCK
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl<S: TickScheduler> Drop for MenuTimerView<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
