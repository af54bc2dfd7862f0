//! In-memory stand-ins for the platform seams.

use crate::{
    ClockReading, CoreError, CoreResult, MenuLayout, ResourceProvider, StatusItemBackend,
    TickScheduler, TimerHandle, ViewFrame, WindowFactory, WindowSpec,
};

use std::{
    cell::RefCell,
    collections::HashMap,
    io::Cursor,
    panic::Location,
    rc::Rc,
    time::Duration,
};

use error_location::ErrorLocation;
use image::{ImageFormat, Rgba, RgbaImage};

/// Timer activity observed by a [`ManualScheduler`].
#[derive(Debug, Default)]
pub(crate) struct SchedulerLog {
    pub(crate) events: Vec<&'static str>,
    pub(crate) live: usize,
    pub(crate) fail_next: bool,
}

/// Shared view of a scheduler's log that outlives the view owning the scheduler.
#[derive(Debug, Default, Clone)]
pub(crate) struct SchedulerTrace(Rc<RefCell<SchedulerLog>>);

impl SchedulerTrace {
    pub(crate) fn live(&self) -> usize {
        self.0.borrow().live
    }

    pub(crate) fn events(&self) -> Vec<&'static str> {
        self.0.borrow().events.clone()
    }

    pub(crate) fn count(&self, event: &str) -> usize {
        self.0.borrow().events.iter().filter(|e| **e == event).count()
    }

    pub(crate) fn fail_next(&self) {
        self.0.borrow_mut().fail_next = true;
    }
}

pub(crate) struct ManualScheduler {
    trace: SchedulerTrace,
}

impl ManualScheduler {
    pub(crate) fn new() -> (Self, SchedulerTrace) {
        let trace = SchedulerTrace::default();
        (
            Self {
                trace: trace.clone(),
            },
            trace,
        )
    }
}

pub(crate) struct ManualHandle {
    trace: SchedulerTrace,
}

impl TickScheduler for ManualScheduler {
    type Handle = ManualHandle;

    #[track_caller]
    fn schedule_repeating(&mut self, _period: Duration) -> CoreResult<ManualHandle> {
        let mut log = self.trace.0.borrow_mut();
        if log.fail_next {
            log.fail_next = false;
            return Err(CoreError::TimerSchedule {
                reason: "scheduler offline".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        log.events.push("schedule");
        log.live += 1;

        Ok(ManualHandle {
            trace: self.trace.clone(),
        })
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        let mut log = self.trace.0.borrow_mut();
        log.events.push("cancel");
        log.live -= 1;
    }
}

/// Backend that records what it was asked to show.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub(crate) icons: Vec<RgbaImage>,
    pub(crate) menus: Vec<MenuLayout>,
    pub(crate) renders: Vec<ClockReading>,
    pub(crate) frames: Vec<ViewFrame>,
    pub(crate) fail_icon: bool,
}

impl StatusItemBackend for RecordingBackend {
    #[track_caller]
    fn set_icon(&mut self, icon: &RgbaImage) -> CoreResult<()> {
        if self.fail_icon {
            return Err(CoreError::Backend {
                reason: "icon rejected".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.icons.push(icon.clone());
        Ok(())
    }

    fn attach_menu(&mut self, layout: &MenuLayout) -> CoreResult<bool> {
        self.menus.push(layout.clone());
        Ok(layout.first_item().is_some())
    }

    fn render_view(&mut self, reading: &ClockReading, frame: ViewFrame) -> CoreResult<()> {
        self.renders.push(reading.clone());
        self.frames.push(frame);
        Ok(())
    }
}

/// Resource provider over decoded images.
#[derive(Debug, Default)]
pub(crate) struct MapResources(pub(crate) HashMap<String, RgbaImage>);

impl MapResources {
    pub(crate) fn with(name: &str, image: RgbaImage) -> Self {
        let mut map = HashMap::new();
        map.insert(name.to_string(), image);
        Self(map)
    }
}

impl ResourceProvider for MapResources {
    fn image(&self, name: &str) -> CoreResult<Option<RgbaImage>> {
        Ok(self.0.get(name).cloned())
    }
}

/// Window factory that counts opened windows.
#[derive(Debug, Default)]
pub(crate) struct CountingWindowFactory {
    pub(crate) opened: Vec<String>,
    pub(crate) fail: bool,
}

impl WindowFactory for CountingWindowFactory {
    type Window = String;

    #[track_caller]
    fn open(&mut self, def: &WindowSpec) -> CoreResult<String> {
        if self.fail {
            return Err(CoreError::Backend {
                reason: "no display".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.opened.push(def.id.clone());
        Ok(def.title.clone())
    }
}

/// 4x4 template: opaque left half, transparent right half, half-alpha bottom-left pixel.
pub(crate) fn template_icon() -> RgbaImage {
    RgbaImage::from_fn(4, 4, |x, y| match (x, y) {
        (0, 3) => Rgba([200, 10, 10, 128]),
        (0..=1, _) => Rgba([255, 255, 255, 255]),
        _ => Rgba([255, 255, 255, 0]),
    })
}

#[allow(clippy::unwrap_used)]
pub(crate) fn png_bytes(image: &RgbaImage) -> &'static [u8] {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png).unwrap();
    Box::leak(cursor.into_inner().into_boxed_slice())
}

pub(crate) const MENU_TOML: &str = r#"
[[items]]
kind = "item"
title = "Date & Time"

[[items]]
kind = "separator"

[[items]]
kind = "show_window"
title = "Preferences..."
window = "preferencesID"
accelerator = "CmdOrCtrl+Comma"

[[items]]
kind = "quit"
title = "Quit"
"#;

pub(crate) const MAIN_TOML: &str = r#"
[[windows]]
id = "preferencesID"
title = "Preferences"
width = 480.0
height = 270.0
"#;
