mod clock_config;
#[allow(clippy::module_inception)]
mod config;
mod icon_config;

pub(crate) use {clock_config::ClockConfig, config::Config, icon_config::IconConfig};

use feeds_client_core::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

pub(crate) const DEFAULT_HIGHLIGHTED: bool = true;
pub(crate) const DEFAULT_SELECTED_COLOR: &str = "#000000";
pub(crate) const DEFAULT_TICK_MILLIS: u64 = 1000;
pub(crate) const MIN_TICK_MILLIS: u64 = 100;
pub(crate) const MAX_TICK_MILLIS: u64 = 60_000;

pub(crate) fn default_highlighted() -> bool {
    DEFAULT_HIGHLIGHTED
}

pub(crate) fn default_selected_color() -> String {
    DEFAULT_SELECTED_COLOR.to_string()
}

pub(crate) fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

pub(crate) fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

pub(crate) fn default_tick_millis() -> u64 {
    DEFAULT_TICK_MILLIS
}
