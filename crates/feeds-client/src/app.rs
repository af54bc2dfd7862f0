use crate::{
    AppResult, MenuAction, PlatformMenuTracking, TaoWindowFactory, TickSink, TokioTickScheduler,
    TrayManager, UiEvent, config::Config, embedded, route_ui_event,
};

use std::collections::HashMap;

use chrono::Local;
use feeds_client_core::{
    EmbeddedResources, MenuLayout, MenuTimerView, StatusItemController, StatusItemSetup,
    TintColorSelector, WindowCatalog, present_window,
};
use tao::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowId},
};
use tracing::{debug, info, instrument, warn};
use tray_icon::menu::MenuId;

/// Main application state.
///
/// Lives on the main thread for the whole process. Timer ticks and tray
/// callbacks reach it as [`UiEvent`]s.
pub struct App<K: TickSink> {
    controller: StatusItemController<TrayManager, TokioTickScheduler<K>>,
    tracking: PlatformMenuTracking,
    catalog: WindowCatalog,
    windows: HashMap<WindowId, Window>,
}

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Exit the event loop.
    Exit,
}

impl<K: TickSink> App<K> {
    /// Create the status item and install icon, menu and clock view.
    #[track_caller]
    #[instrument(skip(config, scheduler))]
    pub fn launch(config: &Config, scheduler: TokioTickScheduler<K>) -> AppResult<Self> {
        let tray = TrayManager::new()?;

        let selector = TintColorSelector::new(config.icon.selected_color()?);
        let view = MenuTimerView::new(scheduler, config.clock.face()?, config.clock.tick_period());

        let mut resources = EmbeddedResources::new(embedded::IMAGES);
        if let Some(dir) = &config.icon.resource_dir {
            resources = resources.with_override_dir(dir);
        }

        let layout = MenuLayout::from_toml("menu", embedded::MENU_LAYOUT)
            .inspect_err(|e| warn!(error = ?e, "Menu layout unusable, status item has no menu"))
            .ok();

        let catalog = WindowCatalog::from_toml(embedded::MAIN_CATALOG_NAME, embedded::MAIN_CATALOG)
            .unwrap_or_else(|e| {
                warn!(error = ?e, "Window catalog unusable, no windows can be opened");
                WindowCatalog::new(embedded::MAIN_CATALOG_NAME, Vec::new())
            });
        if catalog.instantiate(embedded::PREFERENCES_ID).is_none() {
            warn!(id = embedded::PREFERENCES_ID, "Preferences window missing from catalog");
        }

        let mut controller = StatusItemController::new(tray);
        controller.initialize(StatusItemSetup {
            resources: &resources,
            selector: &selector,
            highlighted: config.icon.highlighted,
            layout: layout.as_ref(),
            view,
        });

        info!("FeedsServiceClient ready");

        Ok(Self {
            controller,
            tracking: PlatformMenuTracking,
            catalog,
            windows: HashMap::new(),
        })
    }

    /// Dispatch one event from the loop proxy.
    pub fn handle_ui_event(
        &mut self,
        event: UiEvent,
        target: &EventLoopWindowTarget<UiEvent>,
    ) -> Flow {
        match route_ui_event(&mut self.controller, &self.tracking, &event, &Local::now()) {
            Some(id) => self.run_menu_action(&id, target),
            None => Flow::Continue,
        }
    }

    #[instrument(skip(self, target))]
    fn run_menu_action(&mut self, id: &MenuId, target: &EventLoopWindowTarget<UiEvent>) -> Flow {
        let action = self.controller.backend().action_for(id).cloned();

        match action {
            Some(MenuAction::ShowWindow(id)) => {
                self.open_window(target, &id);
                Flow::Continue
            }
            Some(MenuAction::Quit) => {
                info!("Exit requested from tray menu");
                Flow::Exit
            }
            None => Flow::Continue,
        }
    }

    /// Open the catalog window `id`. Unknown ids are ignored.
    pub fn open_window(&mut self, target: &EventLoopWindowTarget<UiEvent>, id: &str) {
        let mut factory = TaoWindowFactory::new(target);
        if let Some(window) = present_window(&self.catalog, &mut factory, id) {
            debug!(window_id = ?window.id(), id, "Tracking window");
            self.windows.insert(window.id(), window);
        }
    }

    /// Drop a window whose close was requested.
    pub fn close_window(&mut self, window_id: WindowId) {
        if self.windows.remove(&window_id).is_some() {
            debug!(window_id = ?window_id, "Window closed");
        }
    }

    /// Release the timer and windows before the event loop exits.
    pub fn shutdown(&mut self) {
        self.controller.shutdown();
        self.windows.clear();
        info!("FeedsServiceClient shut down");
    }
}
