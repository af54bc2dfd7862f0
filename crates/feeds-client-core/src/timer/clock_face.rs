use crate::{CoreError, CoreResult};

use std::{fmt::Display, panic::Location};

use chrono::{
    DateTime, TimeZone,
    format::{Item, StrftimeItems},
};
use error_location::ErrorLocation;

/// Default time line, e.g. `14:05:09`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Default date line, e.g. `Monday,  5 October 2026`.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %e %B %Y";

/// Formats the clock view's time and date lines.
///
/// Format strings are validated up front so rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    time_format: String,
    date_format: String,
}

/// One rendering of the clock view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// Time line.
    pub time: String,
    /// Date line.
    pub date: String,
}

impl ClockFace {
    /// Build a face from chrono `strftime` format strings.
    #[track_caller]
    pub fn new(time_format: impl Into<String>, date_format: impl Into<String>) -> CoreResult<Self> {
        let time_format = time_format.into();
        let date_format = date_format.into();

        Self::validate(&time_format)?;
        Self::validate(&date_format)?;

        Ok(Self {
            time_format,
            date_format,
        })
    }

    /// Render both lines for `now`.
    pub fn render<Tz>(&self, now: &DateTime<Tz>) -> ClockReading
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        ClockReading {
            time: now.format(&self.time_format).to_string(),
            date: now.format(&self.date_format).to_string(),
        }
    }

    #[track_caller]
    fn validate(format: &str) -> CoreResult<()> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::InvalidFormat {
                format: format.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ClockReading {
    /// Single-line text for hosts that cannot lay out two lines.
    pub fn label(&self) -> String {
        format!("{}   {}", self.time, self.date)
    }
}
