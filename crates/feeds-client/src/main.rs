//! FeedsServiceClient: menu-bar clock with a preferences window.

mod app;
mod config;
mod embedded;
mod error;
mod menu_action;
mod menu_router;
mod menu_tracking;
#[cfg(test)]
mod tests;
mod tick_scheduler;
mod tray_manager;
mod ui_event;
mod window_factory;

pub(crate) use {
    app::{App, Flow},
    error::{AppError, Result as AppResult},
    menu_action::MenuAction,
    menu_router::route_ui_event,
    menu_tracking::PlatformMenuTracking,
    tick_scheduler::{TickSink, TokioTickScheduler},
    tray_manager::TrayManager,
    ui_event::{MenuSignal, UiEvent},
    window_factory::TaoWindowFactory,
};

use crate::config::Config;

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info};
use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("feeds_client=debug,feeds_client_core=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    #[allow(unused_mut)]
    let mut event_loop = EventLoopBuilder::<UiEvent>::with_user_event().build();

    // Menu-bar only: no Dock icon, no app switcher entry.
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UiEvent::TrayIcon(event));
    }));

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UiEvent::Menu(event));
    }));

    // Drives clock timers only; all UI state stays on the main thread.
    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let tick_proxy = event_loop.create_proxy();
    let mut app: Option<App<_>> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                // The tray icon must be created once the loop is running.
                let scheduler =
                    TokioTickScheduler::new(runtime.handle().clone(), tick_proxy.clone());
                match App::launch(&config, scheduler) {
                    Ok(launched) => app = Some(launched),
                    Err(e) => {
                        error!("Failed to launch status item: {:?}", e);
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
            }
            Event::UserEvent(ui_event) => {
                if let Some(app) = app.as_mut() {
                    if app.handle_ui_event(ui_event, target) == Flow::Exit {
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Some(app) = app.as_mut() {
                    app.close_window(window_id);
                }
            }
            Event::LoopDestroyed => {
                if let Some(mut app) = app.take() {
                    app.shutdown();
                }
                info!("Event loop destroyed");
            }
            _ => {}
        }
    });
}

#[track_caller]
fn build_runtime() -> AppResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("feeds-client-timer")
        .enable_time()
        .build()
        .map_err(|e| AppError::RuntimeError {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
