//! Fakes for driving the status item without a tray.

use std::{cell::Cell, rc::Rc, time::Duration};

use feeds_client_core::{
    ClockReading, CoreResult, MenuLayout, MenuTracking, StatusItemBackend, TickScheduler,
    TimerHandle, ViewFrame,
};
use image::RgbaImage;
use tray_icon::{
    MouseButton, MouseButtonState, Rect, TrayIconEvent, TrayIconId, dpi::PhysicalPosition,
};

/// Backend that keeps every rendered reading.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub(crate) renders: Vec<ClockReading>,
}

impl StatusItemBackend for RecordingBackend {
    fn set_icon(&mut self, _icon: &RgbaImage) -> CoreResult<()> {
        Ok(())
    }

    fn attach_menu(&mut self, layout: &MenuLayout) -> CoreResult<bool> {
        Ok(layout.first_item().is_some())
    }

    fn render_view(&mut self, reading: &ClockReading, _frame: ViewFrame) -> CoreResult<()> {
        self.renders.push(reading.clone());
        Ok(())
    }
}

/// Number of timers scheduled and not yet cancelled.
#[derive(Debug, Default, Clone)]
pub(crate) struct LiveTimers(Rc<Cell<usize>>);

impl LiveTimers {
    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

pub(crate) struct CountingScheduler {
    live: LiveTimers,
}

impl CountingScheduler {
    pub(crate) fn new() -> (Self, LiveTimers) {
        let live = LiveTimers::default();
        (Self { live: live.clone() }, live)
    }
}

pub(crate) struct CountingHandle {
    live: LiveTimers,
}

impl TickScheduler for CountingScheduler {
    type Handle = CountingHandle;

    fn schedule_repeating(&mut self, _period: Duration) -> CoreResult<CountingHandle> {
        self.live.0.set(self.live.count() + 1);
        Ok(CountingHandle {
            live: self.live.clone(),
        })
    }
}

impl TimerHandle for CountingHandle {
    fn cancel(self) {
        self.live.0.set(self.live.count() - 1);
    }
}

/// Tracking state fixed at construction.
pub(crate) struct FixedTracking(pub(crate) Option<bool>);

impl MenuTracking for FixedTracking {
    fn is_tracking(&self) -> Option<bool> {
        self.0
    }
}

pub(crate) fn tray_id() -> TrayIconId {
    TrayIconId::new("feeds-client")
}

pub(crate) fn click(button: MouseButton, button_state: MouseButtonState) -> TrayIconEvent {
    TrayIconEvent::Click {
        id: tray_id(),
        position: PhysicalPosition::new(10.0, 5.0),
        rect: Rect::default(),
        button,
        button_state,
    }
}

pub(crate) fn pointer_move() -> TrayIconEvent {
    TrayIconEvent::Move {
        id: tray_id(),
        position: PhysicalPosition::new(12.0, 6.0),
        rect: Rect::default(),
    }
}
