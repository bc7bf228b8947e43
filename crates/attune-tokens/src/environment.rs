//! Battery and ambient-light rules.
//!
//! Low battery turns on power saving and forces dark mode. Dim surroundings
//! also force dark mode. Absent readings never trigger either.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;

/// Battery percentage below which power saving and dark mode are forced.
pub const LOW_BATTERY_PERCENT: i64 = 20;

/// Ambient light (lux) below which dark mode is forced.
pub const DARK_LUX_THRESHOLD: i64 = 300;

/// Ambient light (lux) above which high contrast is forced.
pub const BRIGHT_LUX_THRESHOLD: i64 = 800;

/// Light or dark surface scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub const fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

/// Surface colors that replace a preset's light surfaces in dark mode.
///
/// Accent colors, font and shape stay with the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkPalette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    pub shadow: &'static str,
}

pub const DARK_PALETTE: DarkPalette = DarkPalette {
    background: Rgb::hex(0x0f172a),
    surface: Rgb::hex(0x1e293b),
    text: Rgb::hex(0xf8fafc),
    border: Rgb::hex(0x334155),
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.5)",
};

/// What the environment decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentMode {
    /// Reduced visual effects requested because the battery is low.
    pub power_saving: bool,
    pub color_mode: ColorMode,
}

impl EnvironmentMode {
    /// Classifies battery and light readings.
    ///
    /// Low battery forces dark mode even in bright light.
    pub fn classify(battery_percent: Option<i64>, ambient_lux: Option<i64>) -> Self {
        let low_battery = battery_percent.is_some_and(|b| b < LOW_BATTERY_PERCENT);
        let dim = ambient_lux.is_some_and(|lux| lux < DARK_LUX_THRESHOLD);

        Self {
            power_saving: low_battery,
            color_mode: if low_battery || dim {
                ColorMode::Dark
            } else {
                ColorMode::Light
            },
        }
    }
}

/// True when ambient light alone calls for high contrast.
pub fn is_bright(ambient_lux: Option<i64>) -> bool {
    ambient_lux.is_some_and(|lux| lux > BRIGHT_LUX_THRESHOLD)
}
