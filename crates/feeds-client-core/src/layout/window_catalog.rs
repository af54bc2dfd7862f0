//! Declarative window definitions, looked up by identifier.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// How to build one window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowSpec {
    /// Identifier the window is instantiated by.
    pub id: String,
    /// Title bar text.
    pub title: String,
    /// Content width in points.
    pub width: f64,
    /// Content height in points.
    pub height: f64,
    /// Whether the user may resize the window.
    #[serde(default)]
    pub resizable: bool,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    windows: Vec<WindowSpec>,
}

/// Named collection of [`WindowSpec`]s.
#[derive(Debug, Clone)]
pub struct WindowCatalog {
    name: String,
    windows: Vec<WindowSpec>,
}

impl WindowCatalog {
    /// Parse a catalog from TOML source.
    #[track_caller]
    pub fn from_toml(name: &str, source: &str) -> CoreResult<Self> {
        let file: CatalogFile = toml::from_str(source).map_err(|e| CoreError::LayoutParse {
            name: name.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::new(name, file.windows))
    }

    /// Catalog over already-built specs.
    pub fn new(name: impl Into<String>, windows: Vec<WindowSpec>) -> Self {
        Self {
            name: name.into(),
            windows,
        }
    }

    /// Catalog name (e.g. `Main`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The window definition registered under `id`, if any.
    pub fn instantiate(&self, id: &str) -> Option<&WindowSpec> {
        self.windows.iter().find(|def| def.id == id)
    }
}

/// Platform window system.
pub trait WindowFactory {
    /// Platform window handle.
    type Window;

    /// Create, show and focus a window built from `def`.
    fn open(&mut self, def: &WindowSpec) -> CoreResult<Self::Window>;
}

/// Open the window `id` from `catalog`.
///
/// Returns the new window, or `None` when `id` is unknown or the factory
/// fails. Neither case is reported to the user.
#[instrument(skip(catalog, factory), fields(catalog = catalog.name()))]
pub fn present_window<F: WindowFactory>(
    catalog: &WindowCatalog,
    factory: &mut F,
    id: &str,
) -> Option<F::Window> {
    let Some(def) = catalog.instantiate(id) else {
        debug!("No window registered under this identifier");
        return None;
    };

    match factory.open(def) {
        Ok(window) => {
            info!(title = %def.title, "Window opened");
            Some(window)
        }
        Err(e) => {
            warn!(error = ?e, "Failed to open window");
            None
        }
    }
}
