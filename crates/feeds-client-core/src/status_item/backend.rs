use crate::{ClockReading, CoreResult, MenuLayout, ViewFrame};

use image::RgbaImage;

/// Platform status-bar entry driven by [`StatusItemController`](crate::StatusItemController).
///
/// Implementations live on the UI thread and are never shared.
pub trait StatusItemBackend {
    /// Replace the status-bar icon.
    fn set_icon(&mut self, icon: &RgbaImage) -> CoreResult<()>;

    /// Build and attach the menu described by `layout`.
    ///
    /// Returns `true` when the menu has a first slot that can host the clock
    /// view. `layout` is never empty.
    fn attach_menu(&mut self, layout: &MenuLayout) -> CoreResult<bool>;

    /// Show `reading` in the slot hosting the clock view.
    ///
    /// `frame` is the size the view was designed for. Backends that can host
    /// arbitrary views lay the clock out in it; text-only menu items ignore it.
    fn render_view(&mut self, reading: &ClockReading, frame: ViewFrame) -> CoreResult<()>;
}

/// Platform report on whether a menu is currently being tracked.
pub trait MenuTracking {
    /// `Some(true)` inside a menu tracking loop, `Some(false)` outside one,
    /// `None` when the platform cannot tell.
    fn is_tracking(&self) -> Option<bool>;
}
