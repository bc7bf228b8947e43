//! The fixed catalog of theme presets.
//!
//! Four presets, one per [`Taste`]. Each is a `static` record; lookups hand
//! out references to it, so two lookups of the same taste are the same value.
//!
//! ```rust
//! use attune_tokens::{catalog, Taste};
//!
//! let theme = catalog::preset(Taste::parse("playful"));
//! assert_eq!(theme.border_radius, 24);
//! assert!(std::ptr::eq(catalog::preset(Taste::parse("???")), &catalog::CORPORATE));
//! ```

use serde::Serialize;

use crate::color::Rgb;
use crate::input::Taste;

/// One aesthetic preset: accent colors, surfaces, font and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub taste: Taste,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    /// CSS font stack.
    pub font_family: &'static str,
    /// Corner radius in px.
    pub border_radius: u16,
    /// Border width in px.
    pub border_width: u16,
    /// CSS box-shadow value.
    pub shadow: &'static str,
}

pub static MINIMAL: Theme = Theme {
    taste: Taste::Minimal,
    primary: Rgb::hex(0x171717),
    secondary: Rgb::hex(0x737373),
    background: Rgb::hex(0xffffff),
    surface: Rgb::hex(0xfafafa),
    text: Rgb::hex(0x171717),
    border: Rgb::hex(0xe5e5e5),
    font_family: "'Inter', sans-serif",
    border_radius: 4,
    border_width: 1,
    shadow: "none",
};

pub static BOLD: Theme = Theme {
    taste: Taste::Bold,
    primary: Rgb::hex(0xff4d00),
    secondary: Rgb::hex(0x000000),
    background: Rgb::hex(0xf3f4f6),
    surface: Rgb::hex(0xffffff),
    text: Rgb::hex(0x000000),
    border: Rgb::hex(0x000000),
    font_family: "'Space Grotesk', sans-serif",
    border_radius: 0,
    border_width: 3,
    shadow: "6px 6px 0px #000000",
};

pub static PLAYFUL: Theme = Theme {
    taste: Taste::Playful,
    primary: Rgb::hex(0xec4899),
    secondary: Rgb::hex(0x8b5cf6),
    background: Rgb::hex(0xfff1f2),
    surface: Rgb::hex(0xffffff),
    text: Rgb::hex(0x4c0519),
    border: Rgb::hex(0xfbcfe8),
    font_family: "'Nunito', sans-serif",
    border_radius: 24,
    border_width: 2,
    shadow: "0 10px 25px -5px rgba(236, 72, 153, 0.3)",
};

pub static CORPORATE: Theme = Theme {
    taste: Taste::Corporate,
    primary: Rgb::hex(0x0f766e),
    secondary: Rgb::hex(0x64748b),
    background: Rgb::hex(0xf8fafc),
    surface: Rgb::hex(0xffffff),
    text: Rgb::hex(0x0f172a),
    border: Rgb::hex(0xcbd5e1),
    font_family: "'Merriweather', serif",
    border_radius: 6,
    border_width: 1,
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
};

/// Returns the preset for a taste.
pub fn preset(taste: Taste) -> &'static Theme {
    match taste {
        Taste::Minimal => &MINIMAL,
        Taste::Bold => &BOLD,
        Taste::Playful => &PLAYFUL,
        Taste::Corporate => &CORPORATE,
    }
}

/// Looks up a preset directly from a raw preference string.
///
/// Total: unrecognized names return [`CORPORATE`].
pub fn preset_named(name: &str) -> &'static Theme {
    preset(Taste::parse(name))
}

/// All presets in catalog order.
pub fn all() -> [&'static Theme; 4] {
    Taste::ALL.map(preset)
}
