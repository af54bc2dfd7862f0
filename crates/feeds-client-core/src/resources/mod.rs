//! Named image resources.
//!
//! Images are looked up by bare name (`"MenuIcon"`), first in an optional
//! override directory as `<dir>/<name>.png`, then in a compile-time table.

use crate::{CoreError, CoreResult};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use image::RgbaImage;
use tracing::debug;

/// Name of the status-bar template icon.
pub const MENU_ICON: &str = "MenuIcon";

/// Source of named images.
pub trait ResourceProvider {
    /// Look up and decode `name`.
    ///
    /// `Ok(None)` means no resource by that name exists. A resource that
    /// exists but cannot be decoded is an error.
    fn image(&self, name: &str) -> CoreResult<Option<RgbaImage>>;
}

/// Images compiled into the binary, optionally shadowed by files on disk.
#[derive(Debug, Clone)]
pub struct EmbeddedResources {
    table: &'static [(&'static str, &'static [u8])],
    override_dir: Option<PathBuf>,
}

impl EmbeddedResources {
    /// Resources backed by `table` of `(name, encoded bytes)` pairs.
    pub fn new(table: &'static [(&'static str, &'static [u8])]) -> Self {
        Self {
            table,
            override_dir: None,
        }
    }

    /// Prefer `<dir>/<name>.png` over the embedded bytes when it exists.
    pub fn with_override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    fn embedded(&self, name: &str) -> Option<&'static [u8]> {
        self.table
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| *bytes)
    }

    #[track_caller]
    fn decode(name: &str, bytes: &[u8]) -> CoreResult<RgbaImage> {
        image::load_from_memory(bytes)
            .map(|img| img.into_rgba8())
            .map_err(|e| CoreError::ResourceDecode {
                name: name.to_string(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn from_disk(name: &str, path: &Path) -> CoreResult<RgbaImage> {
        image::open(path)
            .map(|img| img.into_rgba8())
            .map_err(|e| CoreError::ResourceDecode {
                name: name.to_string(),
                reason: format!("{}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl ResourceProvider for EmbeddedResources {
    fn image(&self, name: &str) -> CoreResult<Option<RgbaImage>> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(format!("{name}.png"));
            if path.is_file() {
                debug!(name, path = ?path, "Loading resource override");
                return Self::from_disk(name, &path).map(Some);
            }
        }

        match self.embedded(name) {
            Some(bytes) => Self::decode(name, bytes).map(Some),
            None => Ok(None),
        }
    }
}
