use crate::{
    AppResult,
    config::{
        MAX_TICK_MILLIS, MIN_TICK_MILLIS, default_date_format, default_tick_millis,
        default_time_format,
    },
};

use std::time::Duration;

use feeds_client_core::ClockFace;
use serde::{Deserialize, Serialize};

/// Clock view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// chrono format for the time line.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// chrono format for the date line.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Tick period while the menu is open.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl ClockConfig {
    /// Validated clock face.
    #[track_caller]
    pub fn face(&self) -> AppResult<ClockFace> {
        Ok(ClockFace::new(&self.time_format, &self.date_format)?)
    }

    /// Tick period, clamped to a sane range.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.clamp(MIN_TICK_MILLIS, MAX_TICK_MILLIS))
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            date_format: default_date_format(),
            tick_millis: default_tick_millis(),
        }
    }
}
