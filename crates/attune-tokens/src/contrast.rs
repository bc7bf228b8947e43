//! Contrast classification and the forced text/border colors it implies.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::environment::ColorMode;

/// Border width forced on the minimal preset under age-driven high contrast.
pub const MINIMAL_HIGH_CONTRAST_BORDER_WIDTH: u16 = 2;

/// Normal or high contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ContrastLevel {
    #[default]
    Normal,
    High,
}

impl ContrastLevel {
    pub const fn is_high(self) -> bool {
        matches!(self, ContrastLevel::High)
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            ContrastLevel::Normal => "Normal",
            ContrastLevel::High => "High",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why contrast ended up where it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastCause {
    #[default]
    None,
    Age,
    BrightLight,
    Both,
}

/// The final contrast decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContrastDecision {
    pub level: ContrastLevel,
    pub cause: ContrastCause,
}

impl ContrastDecision {
    /// Combines the age baseline with the bright-light override.
    pub fn resolve(baseline: ContrastLevel, bright: bool) -> Self {
        let cause = match (baseline.is_high(), bright) {
            (true, true) => ContrastCause::Both,
            (true, false) => ContrastCause::Age,
            (false, true) => ContrastCause::BrightLight,
            (false, false) => ContrastCause::None,
        };
        let level = if cause == ContrastCause::None {
            ContrastLevel::Normal
        } else {
            ContrastLevel::High
        };
        Self { level, cause }
    }

    /// True when age alone would have been enough.
    pub fn age_driven(self) -> bool {
        matches!(self.cause, ContrastCause::Age | ContrastCause::Both)
    }
}

/// Text and border color under high contrast: white on dark, black on light.
pub const fn forced_ink(mode: ColorMode) -> Rgb {
    match mode {
        ColorMode::Dark => Rgb::WHITE,
        ColorMode::Light => Rgb::BLACK,
    }
}
