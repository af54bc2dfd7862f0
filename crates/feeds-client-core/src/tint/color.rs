use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// Alpha multiplier applied by [`SystemEffect::Disabled`].
const DISABLED_EFFECT_ALPHA: f32 = 0.5;

/// System-wide visual effects that can be applied to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEffect {
    /// Greyed-out appearance used for inactive controls.
    Disabled,
}

/// Straight-alpha RGBA colour used to tint template images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl TintColor {
    /// Opaque black.
    pub const BLACK: TintColor = TintColor::rgba(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: TintColor = TintColor::rgba(255, 255, 255, 255);

    /// Build a colour from its four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    #[track_caller]
    pub fn from_hex(value: &str) -> CoreResult<Self> {
        let location = Location::caller();
        let invalid = || CoreError::InvalidColor {
            value: value.to_string(),
            location: ErrorLocation::from(location),
        };

        let digits = value.trim().trim_start_matches('#');
        // `from_str_radix` alone would also take a sign prefix.
        let well_formed =
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(invalid());
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&digits[idx * 2..idx * 2 + 2], 16).map_err(|_| invalid())
        };

        let alpha = if digits.len() == 8 { channel(3)? } else { 255 };

        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    /// Same colour with alpha replaced by `alpha` (0.0 to 1.0).
    pub fn with_alpha_component(self, alpha: f32) -> Self {
        Self {
            a: unit_to_channel(alpha),
            ..self
        }
    }

    /// Same colour with a system visual effect applied.
    ///
    /// `Disabled` collapses the colour to its luma and halves its opacity.
    pub fn with_system_effect(self, effect: SystemEffect) -> Self {
        match effect {
            SystemEffect::Disabled => {
                let luma = 0.299 * f32::from(self.r)
                    + 0.587 * f32::from(self.g)
                    + 0.114 * f32::from(self.b);
                let luma = luma.round().clamp(0.0, 255.0) as u8;
                let alpha = (f32::from(self.a) * DISABLED_EFFECT_ALPHA).round() as u8;
                Self::rgba(luma, luma, luma, alpha)
            }
        }
    }
}

impl fmt::Display for TintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
