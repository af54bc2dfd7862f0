//! Status-bar entry lifecycle.
//!
//! Installs the tinted icon and menu once, then routes menu open/close
//! notifications to the hosted [`MenuTimerView`].

use crate::{
    MENU_ICON, MenuLayout, MenuTimerView, ResourceProvider, StatusItemBackend, TickScheduler,
    TintColorSelector, tint_template,
};

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info, instrument, warn};

/// Inputs consumed by [`StatusItemController::initialize`].
pub struct StatusItemSetup<'a, S: TickScheduler> {
    /// Where the `MenuIcon` template is loaded from.
    pub resources: &'a dyn ResourceProvider,
    /// Colour mapping for the icon tint.
    pub selector: &'a TintColorSelector,
    /// Selection predicate fed to `selector`.
    pub highlighted: bool,
    /// Menu to attach, if any.
    pub layout: Option<&'a MenuLayout>,
    /// Clock view to host in the menu's first slot.
    pub view: MenuTimerView<S>,
}

/// What `initialize` managed to install. Anything missing was skipped silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// A tinted icon is shown in the status bar.
    pub icon_installed: bool,
    /// A menu is attached to the status item.
    pub menu_attached: bool,
    /// The clock view is hosted in the menu's first slot.
    pub view_attached: bool,
}

/// Visibility of the attached menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Menu is not shown.
    Closed,
    /// Menu is being tracked by the user.
    Open,
}

/// Owner of the single status-bar entry.
pub struct StatusItemController<B: StatusItemBackend, S: TickScheduler> {
    backend: B,
    view: Option<MenuTimerView<S>>,
    outcome: Option<InitOutcome>,
    menu_state: MenuState,
}

impl<B: StatusItemBackend, S: TickScheduler> StatusItemController<B, S> {
    /// Wrap `backend`. Nothing is shown until [`initialize`](Self::initialize).
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            view: None,
            outcome: None,
            menu_state: MenuState::Closed,
        }
    }

    /// Install icon, menu and clock view. Runs once; later calls return the first outcome.
    #[instrument(skip(self, setup), fields(highlighted = setup.highlighted))]
    pub fn initialize(&mut self, setup: StatusItemSetup<'_, S>) -> InitOutcome {
        if let Some(outcome) = self.outcome {
            warn!(?outcome, "Status item already initialized");
            return outcome;
        }

        let icon_installed = self.install_icon(setup.resources, setup.selector, setup.highlighted);
        let (menu_attached, has_host) = self.install_menu(setup.layout);

        let view_attached = if has_host {
            self.view = Some(setup.view);
            true
        } else {
            debug!("Menu has no first item, clock view not attached");
            false
        };

        let outcome = InitOutcome {
            icon_installed,
            menu_attached,
            view_attached,
        };
        self.outcome = Some(outcome);

        info!(?outcome, "Status item initialized");

        outcome
    }

    /// Menu is about to be shown: start the clock and render it once.
    #[instrument(skip(self))]
    pub fn on_menu_will_open(&mut self) {
        if self.menu_state == MenuState::Open {
            debug!("Menu already open, ignoring");
            return;
        }
        self.menu_state = MenuState::Open;

        let Some(view) = self.view.as_mut() else {
            return;
        };

        if let Err(e) = view.start_timer() {
            warn!(error = ?e, "Failed to start clock timer");
            return;
        }

        self.render(&Local::now());
    }

    /// Menu was dismissed: stop the clock.
    #[instrument(skip(self))]
    pub fn on_menu_did_close(&mut self) {
        if self.menu_state == MenuState::Closed {
            debug!("Menu already closed, ignoring");
            return;
        }
        self.menu_state = MenuState::Closed;

        if let Some(view) = self.view.as_mut() {
            view.stop_timer();
        }
    }

    /// Close the menu if the platform says it is no longer being tracked.
    ///
    /// Covers dismissals that produce no close notification. Returns whether
    /// the menu was closed here.
    pub fn reconcile_tracking(&mut self, tracking: Option<bool>) -> bool {
        if self.menu_state == MenuState::Open && tracking == Some(false) {
            debug!("Menu tracking ended without a close notification");
            self.on_menu_did_close();
            return true;
        }
        false
    }

    /// Timer fired. Returns whether the view was re-rendered.
    ///
    /// Ticks already in flight when the timer was stopped are dropped here.
    pub fn on_tick<Tz>(&mut self, now: &DateTime<Tz>) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.render(now)
    }

    /// Release the timer ahead of process exit.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        self.menu_state = MenuState::Closed;
        if let Some(view) = self.view.as_mut() {
            view.stop_timer();
        }
        info!("Status item shut down");
    }

    /// Current menu visibility.
    pub fn menu_state(&self) -> MenuState {
        self.menu_state
    }

    /// Result of `initialize`, if it has run.
    pub fn outcome(&self) -> Option<InitOutcome> {
        self.outcome
    }

    /// The hosted clock view, if attached.
    pub fn view(&self) -> Option<&MenuTimerView<S>> {
        self.view.as_ref()
    }

    /// The platform backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn install_icon(
        &mut self,
        resources: &dyn ResourceProvider,
        selector: &TintColorSelector,
        highlighted: bool,
    ) -> bool {
        let template = match resources.image(MENU_ICON) {
            Ok(Some(template)) => template,
            Ok(None) => {
                debug!(name = MENU_ICON, "Icon resource not found");
                return false;
            }
            Err(e) => {
                warn!(error = ?e, "Failed to load icon resource");
                return false;
            }
        };

        let color = selector.select(highlighted);
        let tinted = tint_template(&template, color);

        match self.backend.set_icon(&tinted) {
            Ok(()) => {
                debug!(%color, width = tinted.width(), height = tinted.height(), "Icon installed");
                true
            }
            Err(e) => {
                warn!(error = ?e, "Failed to install icon");
                false
            }
        }
    }

    fn install_menu(&mut self, layout: Option<&MenuLayout>) -> (bool, bool) {
        let Some(layout) = layout.filter(|layout| !layout.is_empty()) else {
            debug!("No menu to attach");
            return (false, false);
        };

        match self.backend.attach_menu(layout) {
            Ok(has_host) => (true, has_host),
            Err(e) => {
                warn!(error = ?e, "Failed to attach menu");
                (false, false)
            }
        }
    }

    fn render<Tz>(&mut self, now: &DateTime<Tz>) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(view) = self.view.as_ref() else {
            return false;
        };
        let Some(reading) = view.render(now) else {
            return false;
        };

        match self.backend.render_view(&reading, view.frame()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = ?e, "Failed to render clock view");
                false
            }
        }
    }
}
