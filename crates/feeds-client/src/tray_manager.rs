//! System tray entry backing the status item.
//!
//! Owns the `TrayIcon`, the native menu built from the declarative layout, and
//! the menu item that stands in for the clock view.

use crate::{AppError, AppResult, MenuAction};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use feeds_client_core::{
    ClockReading, CoreError, CoreResult, MenuEntry, MenuLayout, StatusItemBackend, ViewFrame,
};
use image::RgbaImage;
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::{
    IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, accelerator::Accelerator,
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TOOLTIP: &str = "FeedsServiceClient";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    clock_item: Option<MenuItem>,
    actions: HashMap<MenuId, MenuAction>,
}

impl TrayManager {
    /// Create an empty tray entry. Icon and menu arrive via [`StatusItemBackend`].
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon created");

        Ok(Self {
            tray_icon,
            clock_item: None,
            actions: HashMap::new(),
        })
    }

    /// Action bound to a menu item, if any.
    pub fn action_for(&self, id: &MenuId) -> Option<&MenuAction> {
        self.actions.get(id)
    }

    fn append(menu: &Menu, item: &dyn IsMenuItem) -> CoreResult<()> {
        menu.append(item).map_err(|e| backend_error(format!("Failed to add menu item: {}", e)))
    }

    fn bind(actions: &mut HashMap<MenuId, MenuAction>, item: &MenuItem, entry: &MenuEntry) {
        if let Some(action) = MenuAction::from_entry(entry) {
            actions.insert(item.id().clone(), action);
        }
    }

    fn accelerator(entry_title: &str, raw: Option<&str>) -> Option<Accelerator> {
        let raw = raw?;
        match raw.parse::<Accelerator>() {
            Ok(accelerator) => Some(accelerator),
            Err(e) => {
                warn!(title = entry_title, accelerator = raw, error = %e, "Ignoring invalid accelerator");
                None
            }
        }
    }
}

impl StatusItemBackend for TrayManager {
    #[track_caller]
    fn set_icon(&mut self, icon: &RgbaImage) -> CoreResult<()> {
        let icon = Icon::from_rgba(icon.as_raw().clone(), icon.width(), icon.height())
            .map_err(|e| backend_error(format!("Failed to create icon from RGBA: {}", e)))?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| backend_error(format!("Failed to update icon: {}", e)))
    }

    #[instrument(skip(self, layout), fields(entries = layout.entries().len()))]
    fn attach_menu(&mut self, layout: &MenuLayout) -> CoreResult<bool> {
        let menu = Menu::new();
        let mut actions = HashMap::new();
        let mut clock_item = None;

        for (index, entry) in layout.entries().iter().enumerate() {
            // First slot hosts the clock view regardless of what the layout put there.
            if index == 0 {
                let placeholder = match entry {
                    MenuEntry::Item { title }
                    | MenuEntry::ShowWindow { title, .. }
                    | MenuEntry::Quit { title } => title.as_str(),
                    MenuEntry::Separator => "",
                };
                let item = MenuItem::new(placeholder, false, None);
                Self::append(&menu, &item)?;
                clock_item = Some(item);
                continue;
            }

            match entry {
                MenuEntry::Item { title } => {
                    Self::append(&menu, &MenuItem::new(title, false, None))?;
                }
                MenuEntry::Separator => {
                    Self::append(&menu, &PredefinedMenuItem::separator())?;
                }
                MenuEntry::ShowWindow {
                    title, accelerator, ..
                } => {
                    let accelerator = Self::accelerator(title, accelerator.as_deref());
                    let item = MenuItem::new(title, true, accelerator);
                    Self::bind(&mut actions, &item, entry);
                    Self::append(&menu, &item)?;
                }
                MenuEntry::Quit { title } => {
                    let item = MenuItem::new(title, true, None);
                    Self::bind(&mut actions, &item, entry);
                    Self::append(&menu, &item)?;
                }
            }
        }

        self.tray_icon.set_menu(Some(Box::new(menu)));
        self.actions = actions;

        let has_host = clock_item.is_some();
        self.clock_item = clock_item;

        debug!(actions = self.actions.len(), "Menu attached");

        Ok(has_host)
    }

    fn render_view(&mut self, reading: &ClockReading, _frame: ViewFrame) -> CoreResult<()> {
        if let Some(item) = &self.clock_item {
            item.set_text(reading.label());
        }
        Ok(())
    }
}

#[track_caller]
fn backend_error(reason: String) -> CoreError {
    CoreError::Backend {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
