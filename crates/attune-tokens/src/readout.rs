//! Human-readable echo of a resolution.
//!
//! Binding layers show a few tokens and the raw inputs back to the user.
//! Rounding happens here and only here; the token values themselves stay
//! exact.

use serde::Serialize;

use crate::input::Inputs;
use crate::tokens::TokenSet;

/// Display-ready summary of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    /// Base font size rounded to whole px, e.g. `19px`.
    pub font_size: String,
    pub spacing: String,
    /// First family of the effective font stack, unquoted.
    pub font: String,
    pub radius: String,
    pub contrast: String,
    pub color_mode: String,
    pub primary: String,
    pub background: String,
    pub age: String,
    pub battery: String,
    pub lux: String,
    /// Active mode classes, space-separated. Empty when none.
    pub modes: String,
}

impl Readout {
    pub fn from_tokens(tokens: &TokenSet, inputs: &Inputs) -> Self {
        let echo = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

        Self {
            font_size: format!("{}px", tokens.font_size_base.round()),
            spacing: format!("{}rem", tokens.spacing_unit),
            font: display_font_name(tokens.font_family).to_string(),
            radius: format!("{}px", tokens.border_radius),
            contrast: tokens.contrast.label().to_string(),
            color_mode: tokens.color_mode.to_string(),
            primary: tokens.primary.to_string(),
            background: tokens.background.to_string(),
            age: echo(inputs.age),
            battery: echo(inputs.battery_percent),
            lux: echo(inputs.ambient_lux),
            modes: tokens.mode_classes().collect::<Vec<_>>().join(" "),
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 12] {
        [
            ("Font size", self.font_size.as_str()),
            ("Spacing", self.spacing.as_str()),
            ("Font", self.font.as_str()),
            ("Radius", self.radius.as_str()),
            ("Contrast", self.contrast.as_str()),
            ("Mode", self.color_mode.as_str()),
            ("Primary", self.primary.as_str()),
            ("Background", self.background.as_str()),
            ("Age", self.age.as_str()),
            ("Battery", self.battery.as_str()),
            ("Light", self.lux.as_str()),
            ("Modes", self.modes.as_str()),
        ]
    }
}

/// First family of a CSS font stack with quotes stripped.
///
/// ```rust
/// use attune_tokens::readout::display_font_name;
///
/// assert_eq!(display_font_name("'Space Grotesk', sans-serif"), "Space Grotesk");
/// assert_eq!(display_font_name("serif"), "serif");
/// ```
pub fn display_font_name(stack: &str) -> &str {
    let first = stack.split(',').next().unwrap_or_default().trim();
    first.trim_matches(|c| c == '\'' || c == '"')
}
