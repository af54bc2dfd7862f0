//! Resources compiled into the binary.

use feeds_client_core::MENU_ICON;

/// Named images, looked up by `EmbeddedResources`.
pub(crate) const IMAGES: &[(&str, &[u8])] = &[(
    MENU_ICON,
    include_bytes!("../resources/icons/MenuIcon.png"),
)];

/// Status-item menu layout.
pub(crate) const MENU_LAYOUT: &str = include_str!("../resources/menu.toml");

/// Window catalog source and its name.
pub(crate) const MAIN_CATALOG: &str = include_str!("../resources/main.toml");
pub(crate) const MAIN_CATALOG_NAME: &str = "Main";

/// Identifier of the preferences window in the `Main` catalog.
pub(crate) const PREFERENCES_ID: &str = "preferencesID";
