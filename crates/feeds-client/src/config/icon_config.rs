use crate::{
    AppResult,
    config::{default_highlighted, default_selected_color},
};

use std::path::PathBuf;

use feeds_client_core::TintColor;
use serde::{Deserialize, Serialize};

/// Status-bar icon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Selection predicate fed to the tint selector.
    #[serde(default = "default_highlighted")]
    pub highlighted: bool,

    /// Tint for the selected state, `#RRGGBB` or `#RRGGBBAA`.
    #[serde(default = "default_selected_color")]
    pub selected_color: String,

    /// Directory searched for `MenuIcon.png` before the embedded icon.
    #[serde(default)]
    pub resource_dir: Option<PathBuf>,
}

impl IconConfig {
    /// Parsed selected colour.
    #[track_caller]
    pub fn selected_color(&self) -> AppResult<TintColor> {
        Ok(TintColor::from_hex(&self.selected_color)?)
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            highlighted: default_highlighted(),
            selected_color: default_selected_color(),
            resource_dir: None,
        }
    }
}
