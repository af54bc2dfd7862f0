use crate::tint::{SystemEffect, TintColor};

/// Alpha used for the unselected colour where no system effect exists.
const FALLBACK_UNSELECTED_ALPHA: f32 = 0.2;

/// Picks the status-item tint for a selection state.
///
/// Holds exactly two colours, fixed at construction. The unselected colour is
/// derived from the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintColorSelector {
    selected: TintColor,
    unselected: TintColor,
}

impl TintColorSelector {
    /// Selector for `selected`, deriving the unselected colour for this platform.
    pub fn new(selected: TintColor) -> Self {
        Self::with_system_effects(selected, Self::platform_supports_system_effects())
    }

    /// Selector with an explicit answer to "does the platform support system effects".
    pub fn with_system_effects(selected: TintColor, supported: bool) -> Self {
        let unselected = if supported {
            selected.with_system_effect(SystemEffect::Disabled)
        } else {
            selected.with_alpha_component(FALLBACK_UNSELECTED_ALPHA)
        };

        Self {
            selected,
            unselected,
        }
    }

    /// The tint for the given selection state.
    pub fn select(&self, is_selected: bool) -> TintColor {
        if is_selected {
            self.selected
        } else {
            self.unselected
        }
    }

    /// Colour returned for `true`.
    pub fn selected(&self) -> TintColor {
        self.selected
    }

    /// Colour returned for `false`.
    pub fn unselected(&self) -> TintColor {
        self.unselected
    }

    /// Whether the running platform has a system "disabled" colour effect.
    pub fn platform_supports_system_effects() -> bool {
        cfg!(target_os = "macos")
    }
}

impl Default for TintColorSelector {
    fn default() -> Self {
        Self::new(TintColor::BLACK)
    }
}
