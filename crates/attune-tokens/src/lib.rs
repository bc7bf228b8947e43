//! # Attune Tokens - Adaptive Style Token Resolution
//!
//! `attune-tokens` derives presentation tokens (typography scale, spacing,
//! color theme, contrast) from a handful of user and environment inputs:
//! age, aesthetic taste, a dyslexia toggle, battery level and ambient light.
//!
//! Resolution is a pure function. Every call recomputes the whole
//! [`TokenSet`] from the current [`Inputs`]; nothing is remembered between
//! calls, and identical inputs always give identical tokens.
//!
//! ## Core Concepts
//!
//! - [`Inputs`]: typed inputs; `None` switches an optional feature off
//! - [`RawInputs`]: raw control strings, normalized into [`Inputs`]
//! - [`Resolver`]: runs the ordered [`Stage`] pipeline under a [`ResolverConfig`]
//! - [`TokenSet`]: the resolved values, published under stable [`TokenName`]s
//! - [`TokenSink`]: where a binding layer applies tokens ([`StyleMap`], [`CssVariables`])
//!
//! ## Quick Start
//!
//! ```rust
//! use attune_tokens::{resolve_tokens, ColorMode, ContrastLevel, Inputs, Rgb, Taste};
//!
//! let tokens = resolve_tokens(
//!     &Inputs::new(40, Taste::Playful).with_battery(10).with_lux(900),
//! );
//!
//! assert_eq!(tokens.color_mode, ColorMode::Dark);      // battery < 20
//! assert_eq!(tokens.contrast, ContrastLevel::High);    // lux > 800
//! assert_eq!(tokens.text, Rgb::WHITE);                 // high contrast on dark
//! assert_eq!(tokens.primary.to_string(), "#ec4899");   // accent stays playful
//! ```
//!
//! ## Simple and Extended Rule Sets
//!
//! The age + taste rule set is a [`Profile`] over the same resolver:
//!
//! ```rust
//! use attune_tokens::{Inputs, Profile, Resolver, ResolverConfig, Taste};
//!
//! let simple = Resolver::new(ResolverConfig::for_profile(Profile::Simple));
//! let tokens = simple.resolve(&Inputs::new(65, Taste::Minimal).with_lux(10));
//!
//! assert_eq!(tokens.border_width, 2);            // minimal + age contrast
//! assert!(!tokens.color_mode.is_dark());         // light input ignored
//! ```
//!
//! ## Applying Tokens
//!
//! ```rust
//! use attune_tokens::{CssVariables, Inputs, Resolver, Taste};
//!
//! let mut css = CssVariables::new();
//! Resolver::default().resolve_into(&Inputs::new(30, Taste::Bold), &mut css);
//! assert!(css.css().contains("--primary-color: #ff4d00;"));
//! ```

pub mod catalog;
mod color;
pub mod config;
pub mod contrast;
pub mod environment;
mod error;
pub mod input;
pub mod pipeline;
pub mod readout;
pub mod sink;
pub mod tokens;
pub mod typography;

pub use catalog::Theme;
pub use color::{ParseColorError, Rgb};
pub use config::{Capabilities, Profile, ResolverConfig};
pub use contrast::{ContrastCause, ContrastLevel};
pub use environment::{ColorMode, EnvironmentMode};
pub use error::ConfigError;
pub use input::{Inputs, RawInputs, Taste};
pub use pipeline::{resolve_tokens, Resolver, Stage, StageSnapshot};
pub use readout::Readout;
pub use sink::{CssVariables, StyleMap, TokenSink};
pub use tokens::{RenderModes, TokenName, TokenSet};
pub use typography::Typography;
