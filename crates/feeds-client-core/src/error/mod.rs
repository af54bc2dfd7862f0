use error_location::ErrorLocation;
use thiserror::Error;

/// Status-item, layout and timer errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An embedded or on-disk image resource could not be decoded.
    #[error("Failed to decode resource '{name}': {reason} {location}")]
    ResourceDecode {
        /// Resource name as requested by the caller.
        name: String,
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A declarative menu or window layout could not be parsed.
    #[error("Failed to parse layout '{name}': {reason} {location}")]
    LayoutParse {
        /// Layout name (e.g. `menu`, `Main`).
        name: String,
        /// Description of the parse failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A colour string was not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid colour '{value}' {location}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A clock format string contained an unknown specifier.
    #[error("Invalid clock format '{format}' {location}")]
    InvalidFormat {
        /// The rejected format string.
        format: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The platform scheduler refused to create a repeating timer.
    #[error("Failed to schedule timer: {reason} {location}")]
    TimerSchedule {
        /// Description of the scheduler failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The status-item backend rejected an update.
    #[error("Status item backend error: {reason} {location}")]
    Backend {
        /// Description of the backend failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
