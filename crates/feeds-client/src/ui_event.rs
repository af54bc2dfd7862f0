use tray_icon::{MouseButtonState, TrayIconEvent, menu::MenuEvent};

/// Events delivered to the main thread through the `tao` event loop proxy.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`), so
/// tray callbacks and timer ticks from the runtime thread all flow through
/// this enum.
#[derive(Debug)]
pub enum UiEvent {
    /// Mouse activity on the status-bar icon.
    TrayIcon(TrayIconEvent),
    /// A menu item was activated.
    Menu(MenuEvent),
    /// The clock timer fired.
    Tick,
}

/// Menu visibility change inferred from tray icon events.
///
/// The tray reports clicks rather than menu tracking. A button press on the
/// icon stands for "menu will open". The menu's tracking loop swallows the
/// release when it is dismissed, so pointer activity over the icon, which is
/// only delivered outside tracking, also stands for "menu closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    /// The menu is about to be shown.
    WillOpen,
    /// The menu was dismissed.
    DidClose,
}

impl MenuSignal {
    /// Classify a tray icon event, `None` for events unrelated to the menu.
    pub fn from_tray_event(event: &TrayIconEvent) -> Option<Self> {
        match event {
            TrayIconEvent::Click {
                button_state: MouseButtonState::Down,
                ..
            } => Some(Self::WillOpen),
            TrayIconEvent::Click {
                button_state: MouseButtonState::Up,
                ..
            }
            | TrayIconEvent::Enter { .. }
            | TrayIconEvent::Move { .. }
            | TrayIconEvent::Leave { .. } => Some(Self::DidClose),
            _ => None,
        }
    }
}
