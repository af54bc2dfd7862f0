//! Declarative status-item menu.
//!
//! ```toml
//! [[items]]
//! kind = "item"
//! title = "Date & Time"
//!
//! [[items]]
//! kind = "separator"
//!
//! [[items]]
//! kind = "show_window"
//! title = "Preferences..."
//! window = "preferencesID"
//! accelerator = "CmdOrCtrl+Comma"
//!
//! [[items]]
//! kind = "quit"
//! title = "Quit"
//! ```

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// One entry of the status-item menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Plain, inert item. Usually the placeholder that hosts the clock view.
    Item {
        /// Displayed text.
        title: String,
    },
    /// Horizontal separator.
    Separator,
    /// Opens the window with id `window` from the window catalog.
    ShowWindow {
        /// Displayed text.
        title: String,
        /// Window catalog identifier.
        window: String,
        /// Optional keyboard shortcut, e.g. `CmdOrCtrl+Comma`.
        #[serde(default)]
        accelerator: Option<String>,
    },
    /// Terminates the application.
    Quit {
        /// Displayed text.
        title: String,
    },
}

/// Ordered list of menu entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuLayout {
    #[serde(default)]
    items: Vec<MenuEntry>,
}

impl MenuLayout {
    /// Parse a layout from TOML source. `name` is used in error reports.
    #[track_caller]
    pub fn from_toml(name: &str, source: &str) -> CoreResult<Self> {
        toml::from_str(source).map_err(|e| CoreError::LayoutParse {
            name: name.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// All entries, in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.items
    }

    /// The entry whose slot hosts the clock view.
    pub fn first_item(&self) -> Option<&MenuEntry> {
        self.items.first()
    }

    /// Whether the layout has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
