//! Typed sRGB colors for token values.
//!
//! Every color token resolves to an [`Rgb`]. It prints and serializes as a
//! lowercase `#rrggbb` string, which is what style systems consume.
//!
//! ```rust
//! use attune_tokens::Rgb;
//!
//! let teal: Rgb = "#0f766e".parse().unwrap();
//! assert_eq!(teal, Rgb::hex(0x0f766e));
//! assert_eq!(teal.to_string(), "#0f766e");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white, used for forced high-contrast text in dark mode.
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    /// Pure black, used for forced high-contrast text in light mode.
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Returns the components as a tuple.
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Maps the color to the nearest xterm 256-color palette index.
    ///
    /// Grays go to the 24-step grayscale ramp, everything else to the
    /// 6x6x6 color cube.
    pub fn ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{value}' (expected #rgb or #rrggbb)")]
pub struct ParseColorError {
    value: String,
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `#rgb` or `#rrggbb`. The leading `#` is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            value: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| err())
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(err()),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
