use crate::UiEvent;

use std::panic::Location;

use error_location::ErrorLocation;
use feeds_client_core::{CoreError, CoreResult, WindowFactory, WindowSpec};
use tao::{
    dpi::LogicalSize,
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
};

/// Opens catalog windows on the running `tao` event loop.
pub struct TaoWindowFactory<'a> {
    target: &'a EventLoopWindowTarget<UiEvent>,
}

impl<'a> TaoWindowFactory<'a> {
    /// Factory bound to the event loop currently dispatching.
    pub fn new(target: &'a EventLoopWindowTarget<UiEvent>) -> Self {
        Self { target }
    }
}

impl WindowFactory for TaoWindowFactory<'_> {
    type Window = Window;

    #[track_caller]
    fn open(&mut self, def: &WindowSpec) -> CoreResult<Window> {
        let window = WindowBuilder::new()
            .with_title(&def.title)
            .with_inner_size(LogicalSize::new(def.width, def.height))
            .with_resizable(def.resizable)
            .build(self.target)
            .map_err(|e| CoreError::Backend {
                reason: format!("Failed to create window '{}': {}", def.id, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        window.set_focus();

        Ok(window)
    }
}
