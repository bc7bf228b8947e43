//! Resolver configuration: which optional inputs are honoured.
//!
//! There is one resolver. The simple (age + taste) and extended (dyslexia,
//! battery, ambient light) rule sets are two [`Capabilities`] presets over
//! it, and an input whose capability is off is ignored as if absent.
//!
//! ## YAML
//!
//! ```yaml
//! profile: extended        # optional preset, applied first
//! fallback_age: 30         # used when age is missing or unparseable
//! capabilities:            # optional per-capability overrides
//!   battery: false
//! ```
//!
//! ```rust
//! use attune_tokens::ResolverConfig;
//!
//! let config = ResolverConfig::from_yaml("profile: simple\nfallback_age: 40\n").unwrap();
//! assert!(!config.capabilities.ambient_light);
//! assert!(config.capabilities.minimal_border_boost);
//! assert_eq!(config.fallback_age, 40);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Age used when the input carries none.
pub const DEFAULT_FALLBACK_AGE: i64 = 30;

/// The set of optional behaviours a resolver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Honour the dyslexia flag (font-size floor and font override).
    pub dyslexia: bool,
    /// Honour battery level (power saving, battery-forced dark mode).
    pub battery: bool,
    /// Honour ambient light (light-forced dark mode, bright-light contrast).
    pub ambient_light: bool,
    /// Widen the minimal preset's border to 2px under age-driven high contrast.
    pub minimal_border_boost: bool,
}

impl Capabilities {
    /// Age and taste only.
    pub const fn simple() -> Self {
        Self {
            dyslexia: false,
            battery: false,
            ambient_light: false,
            minimal_border_boost: true,
        }
    }

    /// Age, taste, dyslexia, battery and ambient light.
    pub const fn extended() -> Self {
        Self {
            dyslexia: true,
            battery: true,
            ambient_light: true,
            minimal_border_boost: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::extended()
    }
}

/// Named capability presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Simple,
    #[default]
    Extended,
}

impl Profile {
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Profile::Simple => Capabilities::simple(),
            Profile::Extended => Capabilities::extended(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Simple => f.write_str("simple"),
            Profile::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Profile::Simple),
            "extended" => Ok(Profile::Extended),
            _ => Err(format!("unknown profile '{}' (expected simple or extended)", s)),
        }
    }
}

/// Complete resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolverConfig {
    pub capabilities: Capabilities,
    /// Age substituted when the input age is absent.
    pub fallback_age: i64,
}

impl ResolverConfig {
    /// Configuration for a named profile with the default fallback age.
    pub const fn for_profile(profile: Profile) -> Self {
        Self {
            capabilities: profile.capabilities(),
            fallback_age: DEFAULT_FALLBACK_AGE,
        }
    }

    /// Parses configuration from YAML text.
    ///
    /// Every key is optional. Unknown keys are an error so that typos do not
    /// silently fall back to defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        Ok(file.into_config())
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading resolver config");
        Self::from_yaml(&content).map_err(|e| e.with_path(path))
    }

    /// Returns a copy using the given profile's capabilities.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.capabilities = profile.capabilities();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::for_profile(Profile::Extended)
    }
}

/// On-disk shape of the configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    profile: Option<Profile>,
    fallback_age: Option<i64>,
    capabilities: CapabilityOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CapabilityOverrides {
    dyslexia: Option<bool>,
    battery: Option<bool>,
    ambient_light: Option<bool>,
    minimal_border_boost: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> ResolverConfig {
        let mut caps = self.profile.unwrap_or_default().capabilities();
        let o = self.capabilities;
        caps.dyslexia = o.dyslexia.unwrap_or(caps.dyslexia);
        caps.battery = o.battery.unwrap_or(caps.battery);
        caps.ambient_light = o.ambient_light.unwrap_or(caps.ambient_light);
        caps.minimal_border_boost = o.minimal_border_boost.unwrap_or(caps.minimal_border_boost);

        ResolverConfig {
            capabilities: caps,
            fallback_age: self.fallback_age.unwrap_or(DEFAULT_FALLBACK_AGE),
        }
    }
}
