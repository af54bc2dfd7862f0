mod clock_face;
mod scheduler;
mod view;

pub use {
    clock_face::{ClockFace, ClockReading, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT},
    scheduler::{TickScheduler, TimerHandle},
    view::{MenuTimerView, ViewFrame},
};
