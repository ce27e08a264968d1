//! Colors, the named palette and default style constants.
//!
//! Everything here is a `const` table: loaded with the binary and never mutated during a run.

use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::Lerp;

/// Straight (non-premultiplied) RGB8 color. Opacity is tracked separately by styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> KinemaResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(KinemaError::validation(format!(
                "color '{s}' must have the form #RRGGBB"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| KinemaError::validation(format!("color '{s}' is not valid hex")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up a palette entry by case-insensitive name.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Resolve either a palette name or a hex literal.
    pub fn parse(s: &str) -> KinemaResult<Self> {
        match Self::named(s) {
            Some(c) => Ok(c),
            None => Self::from_hex(s),
        }
    }

    /// Format as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// Pure white.
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
/// Pure black.
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
/// Mid gray.
pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
/// Pink.
pub const PINK: Color = Color::rgb(0xD1, 0x47, 0xBD);
/// Red.
pub const RED: Color = Color::rgb(0xFC, 0x62, 0x55);
/// Green.
pub const GREEN: Color = Color::rgb(0x83, 0xC1, 0x67);
/// Blue.
pub const BLUE: Color = Color::rgb(0x58, 0xC4, 0xDD);
/// Yellow.
pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
/// Orange.
pub const ORANGE: Color = Color::rgb(0xFF, 0x86, 0x2F);
/// Purple.
pub const PURPLE: Color = Color::rgb(0x9A, 0x72, 0xAC);
/// Teal.
pub const TEAL: Color = Color::rgb(0x5C, 0xD0, 0xB3);
/// Gold.
pub const GOLD: Color = Color::rgb(0xF0, 0xAC, 0x5F);

/// Name table backing [`Color::named`].
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("WHITE", WHITE),
    ("BLACK", BLACK),
    ("GRAY", GRAY),
    ("PINK", PINK),
    ("RED", RED),
    ("GREEN", GREEN),
    ("BLUE", BLUE),
    ("YELLOW", YELLOW),
    ("ORANGE", ORANGE),
    ("PURPLE", PURPLE),
    ("TEAL", TEAL),
    ("GOLD", GOLD),
];

/// Stroke width given to freshly constructed shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
/// Fill color given to freshly constructed shapes.
pub const DEFAULT_FILL: Color = WHITE;
/// Fill opacity given to freshly constructed shapes.
pub const DEFAULT_FILL_OPACITY: f64 = 1.0;
/// Stroke color given to freshly constructed shapes.
pub const DEFAULT_STROKE: Color = WHITE;

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
