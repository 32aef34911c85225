//! RGBA colors and the shell's palette.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// White color
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values already in range.
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string (`#rrggbb` or `#rrggbbaa`, `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }

        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(|v| f32::from(v) / 255.0)
                .ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Convert to a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Return the same color with a different alpha.
    #[must_use]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Non-hex characters in the input.
    #[error("invalid hex characters in '{0}'")]
    InvalidHex(String),
    /// Wrong number of hex digits.
    #[error("invalid hex string length {0} (expected 6 or 8)")]
    InvalidLength(usize),
}

/// Nav-pill palette shared by the tabs widgets and the shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Surface behind grouped controls
    pub surface: Color,
    /// Accent used for the active pill
    pub primary: Color,
    /// Text on the active pill
    pub on_primary: Color,
    /// Regular text
    pub text: Color,
    /// Text for disabled controls
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::opaque(0.97, 0.97, 0.98),
            surface: Color::WHITE,
            primary: Color::opaque(0.05, 0.43, 0.99),
            on_primary: Color::WHITE,
            text: Color::opaque(0.13, 0.15, 0.16),
            muted: Color::opaque(0.42, 0.46, 0.49),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new_clamps() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_from_hex_rgb_and_rgba() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(red, Color::opaque(1.0, 0.0, 0.0));

        let half = Color::from_hex("00ff0080").unwrap();
        assert_eq!(half.g, 1.0);
        assert!((half.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(
            Color::from_hex("#ff"),
            Err(ColorParseError::InvalidLength(2))
        );
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::opaque(1.0, 0.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_palette_primary_differs_from_surface() {
        let p = Palette::default();
        assert_ne!(p.primary, p.surface);
    }
}
