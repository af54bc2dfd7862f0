use crate::{AppError, config::Config};

use std::time::Duration;

use feeds_client_core::TintColor;

/// WHAT: Empty config file yields defaults
/// WHY: Older or hand-trimmed files must still load
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_file_when_parsing_then_defaults_used() {
    // Given/When: Empty TOML
    let config = Config::from_toml_str("").unwrap();

    // Then: Highlighted black icon, one-second ticks
    assert!(config.icon.highlighted);
    assert_eq!(config.icon.selected_color().unwrap(), TintColor::BLACK);
    assert!(config.icon.resource_dir.is_none());
    assert_eq!(config.clock.tick_period(), Duration::from_secs(1));
    assert!(config.validate().is_ok());
}

/// WHAT: Partial sections merge with defaults
/// WHY: Users override only what they care about
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_parsing_then_overrides_applied() {
    // Given: Only some keys set
    let source = r##"
[icon]
highlighted = false
selected_color = "#FFFFFF"

[clock]
time_format = "%H:%M"
"##;

    // When: Parsing
    let config = Config::from_toml_str(source).unwrap();

    // Then: Overrides applied, rest defaulted
    assert!(!config.icon.highlighted);
    assert_eq!(config.icon.selected_color().unwrap(), TintColor::WHITE);
    assert_eq!(config.clock.time_format, "%H:%M");
    assert_eq!(config.clock.tick_millis, 1000);
}

/// WHAT: Tick period is clamped
/// WHY: Zero or huge periods would stall or never repaint the clock
#[test]
#[allow(clippy::unwrap_used)]
fn given_out_of_range_tick_when_reading_period_then_clamped() {
    // Given: Too small and too large periods
    let fast = Config::from_toml_str("[clock]\ntick_millis = 0\n").unwrap();
    let slow = Config::from_toml_str("[clock]\ntick_millis = 3600000\n").unwrap();

    // When/Then: Clamped into range
    assert_eq!(fast.clock.tick_period(), Duration::from_millis(100));
    assert_eq!(slow.clock.tick_period(), Duration::from_secs(60));
}

/// WHAT: Invalid colour fails validation
/// WHY: A typo must be reported at startup, not silently ignored
#[test]
#[allow(clippy::unwrap_used)]
fn given_bad_colour_when_validating_then_config_error() {
    // Given: Unparseable colour
    let config = Config::from_toml_str("[icon]\nselected_color = \"black\"\n").unwrap();

    // When: Validating
    let result = config.validate();

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Invalid clock format fails validation
/// WHY: Rendering must never hit an unknown specifier
#[test]
#[allow(clippy::unwrap_used)]
fn given_bad_format_when_validating_then_config_error() {
    // Given: Dangling specifier
    let config = Config::from_toml_str("[clock]\ndate_format = \"%Y-%\"\n").unwrap();

    // When/Then: ConfigError
    assert!(matches!(config.validate(), Err(AppError::ConfigError { .. })));
}

/// WHAT: Malformed TOML is a ConfigError
/// WHY: Parse failures must surface with context
#[test]
fn given_malformed_toml_when_parsing_then_config_error() {
    // Given/When: Broken TOML
    let result = Config::from_toml_str("[icon\nhighlighted = ");

    // Then: ConfigError
    assert!(matches!(result, Err(AppError::ConfigError { .. })));
}

/// WHAT: Serialized config parses back to the same values
/// WHY: Saved defaults must be readable on next launch
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_config_when_serialized_then_parses_back() {
    // Given: Default config serialized as the save path does
    let contents = toml::to_string_pretty(&Config::default()).unwrap();

    // When: Parsing it back
    let config = Config::from_toml_str(&contents).unwrap();

    // Then: Key values survive
    assert_eq!(config.icon.selected_color, "#000000");
    assert_eq!(config.clock.date_format, "%A, %e %B %Y");
}
