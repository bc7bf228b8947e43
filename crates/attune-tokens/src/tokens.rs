//! The resolved token set and its stable token names.
//!
//! A [`TokenSet`] is produced wholesale by every resolution. Sinks read it
//! through [`TokenSet::entries`], which yields each [`TokenName`] with its
//! CSS-ready value in a fixed order.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::contrast::{ContrastCause, ContrastLevel};
use crate::environment::ColorMode;
use crate::input::Taste;

/// Rendering modes a sink toggles alongside the token values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RenderModes {
    /// Dyslexia-friendly rendering (accommodating font family).
    pub dyslexic: bool,
    /// Reduced visual effects for low battery.
    pub power_saving: bool,
}

impl RenderModes {
    pub const DYSLEXIC_CLASS: &'static str = "dyslexic-mode";
    pub const POWER_SAVING_CLASS: &'static str = "power-saving-mode";

    /// Class names of the active modes.
    pub fn classes(self) -> impl Iterator<Item = &'static str> {
        [
            (self.dyslexic, Self::DYSLEXIC_CLASS),
            (self.power_saving, Self::POWER_SAVING_CLASS),
        ]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
    }
}

/// The complete, final set of presentation values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSet {
    /// Base font size in px, unrounded.
    pub font_size_base: f64,
    /// Spacing unit in rem.
    pub spacing_unit: f64,
    /// Effective font stack.
    pub font_family: &'static str,
    /// The preset's font stack. Differs from `font_family` while dyslexia
    /// mode suppresses it.
    pub theme_font_family: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    /// Corner radius in px.
    pub border_radius: u16,
    /// Border width in px.
    pub border_width: u16,
    pub shadow: &'static str,
    pub contrast: ContrastLevel,
    pub contrast_cause: ContrastCause,
    pub color_mode: ColorMode,
    pub modes: RenderModes,
    pub taste: Taste,
}

impl TokenSet {
    /// Renders a single token as a CSS value.
    pub fn value(&self, name: TokenName) -> String {
        match name {
            TokenName::FontSizeBase => format!("{}px", self.font_size_base),
            TokenName::SpacingUnit => format!("{}rem", self.spacing_unit),
            TokenName::PrimaryColor => self.primary.to_string(),
            TokenName::SecondaryColor => self.secondary.to_string(),
            TokenName::BgColor => self.background.to_string(),
            TokenName::SurfaceColor => self.surface.to_string(),
            TokenName::TextColor => self.text.to_string(),
            TokenName::BorderColor => self.border.to_string(),
            TokenName::FontFamily => self.font_family.to_string(),
            TokenName::BorderRadius => format!("{}px", self.border_radius),
            TokenName::BorderWidth => format!("{}px", self.border_width),
            TokenName::Shadow => self.shadow.to_string(),
        }
    }

    /// Every token with its CSS value, in [`TokenName::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (TokenName, String)> + '_ {
        TokenName::ALL.into_iter().map(|name| (name, self.value(name)))
    }

    /// Class names of the active rendering modes.
    pub fn mode_classes(&self) -> impl Iterator<Item = &'static str> {
        self.modes.classes()
    }
}

/// The stable names under which tokens are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenName {
    FontSizeBase,
    SpacingUnit,
    PrimaryColor,
    SecondaryColor,
    BgColor,
    SurfaceColor,
    TextColor,
    BorderColor,
    FontFamily,
    BorderRadius,
    BorderWidth,
    Shadow,
}

impl TokenName {
    pub const ALL: [TokenName; 12] = [
        TokenName::FontSizeBase,
        TokenName::SpacingUnit,
        TokenName::PrimaryColor,
        TokenName::SecondaryColor,
        TokenName::BgColor,
        TokenName::SurfaceColor,
        TokenName::TextColor,
        TokenName::BorderColor,
        TokenName::FontFamily,
        TokenName::BorderRadius,
        TokenName::BorderWidth,
        TokenName::Shadow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenName::FontSizeBase => "font-size-base",
            TokenName::SpacingUnit => "spacing-unit",
            TokenName::PrimaryColor => "primary-color",
            TokenName::SecondaryColor => "secondary-color",
            TokenName::BgColor => "bg-color",
            TokenName::SurfaceColor => "surface-color",
            TokenName::TextColor => "text-color",
            TokenName::BorderColor => "border-color",
            TokenName::FontFamily => "font-family",
            TokenName::BorderRadius => "border-radius",
            TokenName::BorderWidth => "border-width",
            TokenName::Shadow => "shadow",
        }
    }

    /// Name as a CSS custom property, e.g. `--bg-color`.
    pub fn custom_property(self) -> String {
        format!("--{}", self.as_str())
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
