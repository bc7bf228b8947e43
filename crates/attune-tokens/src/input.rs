//! Resolution inputs and raw control-value normalization.
//!
//! [`Inputs`] is what the resolver consumes: already-typed values where
//! `None` means "absent". [`RawInputs`] is what a binding layer actually
//! reads from its controls (strings), and [`RawInputs::normalize`] is the one
//! place where malformed values are turned into "absent" instead of leaking
//! into styling.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aesthetic preference selecting one of the four theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taste {
    Minimal,
    Bold,
    Playful,
    /// The default, and the fallback for anything unrecognized.
    #[default]
    Corporate,
}

impl Taste {
    /// All presets, in catalog order.
    pub const ALL: [Taste; 4] = [Taste::Minimal, Taste::Bold, Taste::Playful, Taste::Corporate];

    /// Maps a raw preference string to a taste.
    ///
    /// Matching is exact: only the lowercase names `minimal`, `bold` and
    /// `playful` select their presets. Every other value, including the empty
    /// string and differently-cased names, is [`Taste::Corporate`].
    pub fn parse(value: &str) -> Self {
        match value {
            "minimal" => Taste::Minimal,
            "bold" => Taste::Bold,
            "playful" => Taste::Playful,
            _ => Taste::Corporate,
        }
    }

    /// The stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Taste::Minimal => "minimal",
            Taste::Bold => "bold",
            Taste::Playful => "playful",
            Taste::Corporate => "corporate",
        }
    }
}

impl FromStr for Taste {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Taste::parse(s))
    }
}

impl fmt::Display for Taste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One resolution's worth of inputs.
///
/// Optional fields left as `None` switch their feature off: no dyslexia
/// accommodation, no power-saving or battery-driven dark mode, no
/// light-driven dark mode or contrast boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Inputs {
    /// User age in years. `None` resolves to the configured fallback age.
    pub age: Option<i64>,
    pub taste: Taste,
    pub dyslexic: Option<bool>,
    /// Battery charge, 0-100.
    pub battery_percent: Option<i64>,
    /// Ambient light in lux.
    pub ambient_lux: Option<i64>,
}

impl Inputs {
    /// Inputs for the simple variant: age and taste only.
    pub fn new(age: i64, taste: Taste) -> Self {
        Self {
            age: Some(age),
            taste,
            ..Self::default()
        }
    }

    pub fn with_dyslexic(mut self, dyslexic: bool) -> Self {
        self.dyslexic = Some(dyslexic);
        self
    }

    pub fn with_battery(mut self, percent: i64) -> Self {
        self.battery_percent = Some(percent);
        self
    }

    pub fn with_lux(mut self, lux: i64) -> Self {
        self.ambient_lux = Some(lux);
        self
    }
}

/// Raw, unvalidated control values as a binding layer reads them.
///
/// All fields are strings so that what the user typed reaches
/// [`normalize`](RawInputs::normalize) untouched. Deserializes from YAML or
/// JSON profiles:
///
/// ```yaml
/// age: "62"
/// taste: bold
/// battery: 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawInputs {
    #[serde(deserialize_with = "scalar_string")]
    pub age: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub taste: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub dyslexic: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub battery: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub lux: Option<String>,
}

impl RawInputs {
    /// Layers `other` on top of `self`: fields set in `other` win.
    pub fn merge(self, other: RawInputs) -> RawInputs {
        RawInputs {
            age: other.age.or(self.age),
            taste: other.taste.or(self.taste),
            dyslexic: other.dyslexic.or(self.dyslexic),
            battery: other.battery.or(self.battery),
            lux: other.lux.or(self.lux),
        }
    }

    /// Converts raw strings into typed [`Inputs`].
    ///
    /// Numbers use leading-integer parsing (see [`parse_leading_int`]);
    /// anything without a leading integer becomes `None`. A missing taste is
    /// corporate.
    pub fn normalize(&self) -> Inputs {
        let number = |field: &'static str, raw: &Option<String>| {
            let raw = raw.as_deref()?;
            let parsed = parse_leading_int(raw);
            if parsed.is_none() {
                tracing::trace!(field, raw, "unparseable number treated as absent");
            }
            parsed
        };

        let dyslexic = self.dyslexic.as_deref().and_then(|raw| {
            let parsed = parse_flag(raw);
            if parsed.is_none() {
                tracing::trace!(raw, "unparseable dyslexia flag treated as absent");
            }
            parsed
        });

        Inputs {
            age: number("age", &self.age),
            taste: self.taste.as_deref().map(Taste::parse).unwrap_or_default(),
            dyslexic,
            battery_percent: number("battery", &self.battery),
            ambient_lux: number("lux", &self.lux),
        }
    }
}

/// Parses the integer prefix of a string.
///
/// Leading and trailing whitespace is ignored, one optional `+`/`-` sign is
/// accepted, and digits are consumed up to the first non-digit character.
/// Values that overflow `i64` saturate.
///
/// ```rust
/// use attune_tokens::input::parse_leading_int;
///
/// assert_eq!(parse_leading_int(" 42px"), Some(42));
/// assert_eq!(parse_leading_int("30.9"), Some(30));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("px42"), None);
/// assert_eq!(parse_leading_int(""), None);
/// ```
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Parses a checkbox-style flag. Unknown values are `None`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Accepts strings, numbers and booleans, keeping their textual form.
///
/// Profiles are hand-written, so `age: 62` and `age: "62"` must both work.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Str(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}
