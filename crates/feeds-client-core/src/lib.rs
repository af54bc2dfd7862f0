//! FeedsServiceClient Core Library
//!
//! Platform-independent pieces of the menu-bar client: status-item icon
//! tinting, the menu-driven clock timer, and the declarative menu and window
//! layouts. The binary crate plugs a real status item, timer and window
//! system into the seams defined here.
//!
//! # Example
//!
//! ```no_run
//! use feeds_client_core::{
//!     ClockFace, CoreResult, EmbeddedResources, MenuLayout, MenuTimerView, StatusItemBackend,
//!     StatusItemController, StatusItemSetup, TickScheduler, TintColorSelector,
//! };
//!
//! use std::time::Duration;
//!
//! fn launch<B: StatusItemBackend, S: TickScheduler>(backend: B, scheduler: S) -> CoreResult<()> {
//!     let layout = MenuLayout::from_toml("menu", "[[items]]\nkind = \"item\"\ntitle = \"Clock\"\n")?;
//!     let view = MenuTimerView::new(scheduler, ClockFace::default(), Duration::from_secs(1));
//!
//!     let mut controller = StatusItemController::new(backend);
//!     controller.initialize(StatusItemSetup {
//!         resources: &EmbeddedResources::new(&[]),
//!         selector: &TintColorSelector::default(),
//!         highlighted: true,
//!         layout: Some(&layout),
//!         view,
//!     });
//!
//!     controller.on_menu_will_open();
//!     controller.on_menu_did_close();
//!     Ok(())
//! }
//! ```

mod error;
mod layout;
mod resources;
mod status_item;
mod timer;
mod tint;

pub use {
    error::{CoreError, Result as CoreResult},
    layout::{
        MenuEntry, MenuLayout, WindowCatalog, WindowFactory, WindowSpec, present_window,
    },
    resources::{EmbeddedResources, MENU_ICON, ResourceProvider},
    status_item::{
        InitOutcome, MenuState, MenuTracking, StatusItemBackend, StatusItemController,
        StatusItemSetup,
    },
    timer::{
        ClockFace, ClockReading, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, MenuTimerView,
        TickScheduler, TimerHandle, ViewFrame,
    },
    tint::{SystemEffect, TintColor, TintColorSelector, tint_template},
};

#[cfg(test)]
mod tests;
