//! Applies loop events to the status item.

use crate::{MenuSignal, UiEvent};

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use feeds_client_core::{
    MenuState, MenuTracking, StatusItemBackend, StatusItemController, TickScheduler,
};
use tray_icon::menu::MenuId;

/// Route `event` to `controller`.
///
/// Returns the id of an activated menu item so the caller can run its action.
/// The menu is already closed by then.
pub fn route_ui_event<B, S, T, Tz>(
    controller: &mut StatusItemController<B, S>,
    tracking: &T,
    event: &UiEvent,
    now: &DateTime<Tz>,
) -> Option<MenuId>
where
    B: StatusItemBackend,
    S: TickScheduler,
    T: MenuTracking,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match event {
        UiEvent::TrayIcon(event) => {
            match MenuSignal::from_tray_event(event) {
                Some(MenuSignal::WillOpen) => controller.on_menu_will_open(),
                // Pointer events stream in constantly; only an open menu cares.
                Some(MenuSignal::DidClose) if controller.menu_state() == MenuState::Open => {
                    controller.on_menu_did_close()
                }
                _ => {}
            }
            None
        }
        UiEvent::Menu(event) => {
            // Activating an item dismisses the menu.
            controller.on_menu_did_close();
            Some(event.id.clone())
        }
        UiEvent::Tick => {
            controller.reconcile_tracking(tracking.is_tracking());
            controller.on_tick(now);
            None
        }
    }
}
