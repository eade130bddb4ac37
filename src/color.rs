//! Opaque pixel colors used for modules, backgrounds, and eye artwork.

use core::str::FromStr;
use image::Rgba;

use crate::error::RenderError;

/// An RGBA color.
///
/// Parsed from `#RRGGBB`, `RRGGBB`, or `#AARRGGBB` (alpha first, as in packed
/// `0xAARRGGBB` literals).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub Rgba<u8>);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates an opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(Rgba([r, g, b, 255]))
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(Rgba([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ]))
    }

    pub fn is_opaque(self) -> bool {
        self.0 .0[3] == 255
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        self.0
    }

    /// Returns `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0 .0;
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        Color(px)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RenderError::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| RenderError::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(Color::from_argb(0xFF00_0000 | value)),
            8 => Ok(Color::from_argb(value)),
            _ => Err(RenderError::InvalidColor(s.to_string())),
        }
    }
}

/// The swatches offered by the generator's color picker.
pub const PRESETS: [Color; 12] = [
    Color::BLACK,
    Color::WHITE,
    Color::from_argb(0xFF10B981),
    Color::from_argb(0xFF14B8A6),
    Color::from_argb(0xFFF59E0B),
    Color::from_argb(0xFFEF4444),
    Color::from_argb(0xFF3B82F6),
    Color::from_argb(0xFF8B5CF6),
    Color::from_argb(0xFFEC4899),
    Color::from_argb(0xFF22C55E),
    Color::from_argb(0xFF0A0F1C),
    Color::from_argb(0xFF6366F1),
];
