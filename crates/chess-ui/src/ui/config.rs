use thiserror::Error;

use super::board::Orientation;

/// Configuration for the chess view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Light square color, `#rrggbb`. Default: `#e0d6f5`.
    pub light_square: String,
    /// Dark square color, `#rrggbb`. Default: `#5e4b8b`.
    pub dark_square: String,
    /// Side shown at the bottom of the board. Default: White.
    pub orientation: Orientation,
    /// Viewports narrower than this (logical pixels) stack the board above
    /// the move history instead of side by side. Default: 768.
    pub mobile_breakpoint: u32,
}

impl UiConfig {
    /// Validate configuration values.
    ///
    /// Checks:
    /// - both square colors are `#rrggbb` hex strings
    /// - `mobile_breakpoint >= 1`
    pub fn validate(&self) -> Result<(), ConfigError> {
        Rgb::parse_hex(&self.light_square)?;
        Rgb::parse_hex(&self.dark_square)?;
        if self.mobile_breakpoint == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_light_square(mut self, color: impl Into<String>) -> Self {
        self.light_square = color.into();
        self
    }

    #[must_use]
    pub fn with_dark_square(mut self, color: impl Into<String>) -> Self {
        self.dark_square = color.into();
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_mobile_breakpoint(mut self, breakpoint: u32) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            light_square: "#e0d6f5".to_string(),
            dark_square: "#5e4b8b".to_string(),
            orientation: Orientation::White,
            mobile_breakpoint: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid square color {value:?}: {reason}")]
    InvalidColor { value: String, reason: &'static str },

    #[error("mobile_breakpoint must be >= 1")]
    ZeroBreakpoint,
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn parse_hex(value: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidColor {
            value: value.to_string(),
            reason,
        };
        let hex = value.strip_prefix('#').ok_or_else(|| invalid("missing '#'"))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid("expected six hex digits"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid("not a hex digit"))
        };
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}
