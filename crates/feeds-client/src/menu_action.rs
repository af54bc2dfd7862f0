use feeds_client_core::MenuEntry;

/// What activating a menu item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the catalog window with this identifier.
    ShowWindow(String),
    /// Exit the application.
    Quit,
}

impl MenuAction {
    /// Action bound to `entry`, `None` for inert entries.
    pub fn from_entry(entry: &MenuEntry) -> Option<Self> {
        match entry {
            MenuEntry::ShowWindow { window, .. } => Some(Self::ShowWindow(window.clone())),
            MenuEntry::Quit { .. } => Some(Self::Quit),
            MenuEntry::Item { .. } | MenuEntry::Separator => None,
        }
    }
}
