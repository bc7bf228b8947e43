//! The ordered override pipeline.
//!
//! Resolution runs four stages over one [`TokenBuilder`]. Later stages
//! overwrite what earlier ones wrote, so [`Stage::ORDER`] is the contract:
//!
//! ```text
//! Inputs + ResolverConfig
//!     │
//!     ▼
//! Typography   font size, spacing, age contrast baseline, dyslexia mode
//!     │
//!     ▼
//! Theme        every preset field for the taste (font unless dyslexic)
//!     │
//!     ▼
//! Environment  power saving; dark palette over background/surface/text/border/shadow
//!     │
//!     ▼
//! Contrast     final level; text/border forced to white (dark) or black (light)
//!     │
//!     ▼
//! TokenSet
//! ```
//!
//! Nothing survives between calls: every resolution starts from a fresh
//! builder.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::{self, Theme};
use crate::config::ResolverConfig;
use crate::contrast::{
    forced_ink, ContrastCause, ContrastDecision, ContrastLevel, MINIMAL_HIGH_CONTRAST_BORDER_WIDTH,
};
use crate::environment::{is_bright, ColorMode, EnvironmentMode, DARK_PALETTE};
use crate::input::{Inputs, Taste};
use crate::sink::TokenSink;
use crate::tokens::{RenderModes, TokenName, TokenSet};
use crate::typography::{Typography, DYSLEXIA_FONT_FAMILY};

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Typography,
    Theme,
    Environment,
    Contrast,
}

impl Stage {
    /// Execution order. Each stage may override the ones before it.
    pub const ORDER: [Stage; 4] = [
        Stage::Typography,
        Stage::Theme,
        Stage::Environment,
        Stage::Contrast,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::Typography => "typography",
            Stage::Theme => "theme",
            Stage::Environment => "environment",
            Stage::Contrast => "contrast",
        }
    }

    /// Runs this stage against the builder.
    pub fn apply(self, ctx: &StageContext, tokens: &mut TokenBuilder) {
        match self {
            Stage::Typography => apply_typography(ctx, tokens),
            Stage::Theme => apply_theme(ctx, tokens),
            Stage::Environment => apply_environment(ctx, tokens),
            Stage::Contrast => apply_contrast(ctx, tokens),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs after fallbacks and capability gating.
///
/// Stages read only this, never the raw [`Inputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageContext {
    pub age: i64,
    pub taste: Taste,
    pub dyslexic: bool,
    pub battery_percent: Option<i64>,
    pub ambient_lux: Option<i64>,
    pub minimal_border_boost: bool,
}

impl StageContext {
    /// Applies the fallback age and drops inputs whose capability is off.
    pub fn new(inputs: &Inputs, config: &ResolverConfig) -> Self {
        let caps = config.capabilities;
        let age = inputs.age.unwrap_or_else(|| {
            tracing::debug!(fallback = config.fallback_age, "age absent, using fallback");
            config.fallback_age
        });

        Self {
            age,
            taste: inputs.taste,
            dyslexic: caps.dyslexia && inputs.dyslexic.unwrap_or(false),
            battery_percent: inputs.battery_percent.filter(|_| caps.battery),
            ambient_lux: inputs.ambient_lux.filter(|_| caps.ambient_light),
            minimal_border_boost: caps.minimal_border_boost,
        }
    }
}

/// Token state while a resolution is in progress.
///
/// Besides the values, the builder records which tokens were written since
/// the last [`take_written`](TokenBuilder::take_written), whether or not the
/// value differs from what was there before.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBuilder {
    tokens: TokenSet,
    written: BTreeSet<TokenName>,
}

impl TokenBuilder {
    /// A builder holding the corporate preset at the middle age bucket.
    pub fn new() -> Self {
        let theme = &catalog::CORPORATE;
        Self {
            tokens: TokenSet {
                font_size_base: 16.0,
                spacing_unit: 1.0,
                font_family: theme.font_family,
                theme_font_family: theme.font_family,
                primary: theme.primary,
                secondary: theme.secondary,
                background: theme.background,
                surface: theme.surface,
                text: theme.text,
                border: theme.border,
                border_radius: theme.border_radius,
                border_width: theme.border_width,
                shadow: theme.shadow,
                contrast: ContrastLevel::Normal,
                contrast_cause: ContrastCause::None,
                color_mode: ColorMode::Light,
                modes: RenderModes::default(),
                taste: theme.taste,
            },
            written: BTreeSet::new(),
        }
    }

    /// The tokens as they stand.
    pub fn current(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn build(self) -> TokenSet {
        self.tokens
    }

    /// Tokens written since the previous call, in [`TokenName::ALL`] order.
    pub fn take_written(&mut self) -> Vec<TokenName> {
        std::mem::take(&mut self.written).into_iter().collect()
    }

    fn mark(&mut self, names: &[TokenName]) {
        self.written.extend(names.iter().copied());
    }

    fn set_theme(&mut self, theme: &Theme) {
        let t = &mut self.tokens;
        t.taste = theme.taste;
        t.primary = theme.primary;
        t.secondary = theme.secondary;
        t.background = theme.background;
        t.surface = theme.surface;
        t.text = theme.text;
        t.border = theme.border;
        t.theme_font_family = theme.font_family;
        t.border_radius = theme.border_radius;
        t.border_width = theme.border_width;
        t.shadow = theme.shadow;
        let keep_font = t.modes.dyslexic;
        if !keep_font {
            t.font_family = theme.font_family;
        }

        self.mark(&[
            TokenName::PrimaryColor,
            TokenName::SecondaryColor,
            TokenName::BgColor,
            TokenName::SurfaceColor,
            TokenName::TextColor,
            TokenName::BorderColor,
            TokenName::BorderRadius,
            TokenName::BorderWidth,
            TokenName::Shadow,
        ]);
        if !keep_font {
            self.mark(&[TokenName::FontFamily]);
        }
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_typography(ctx: &StageContext, tokens: &mut TokenBuilder) {
    let typography = Typography::for_age(ctx.age, ctx.dyslexic);
    tracing::debug!(
        age = ctx.age,
        font_size_base = typography.font_size_base,
        spacing_unit = typography.spacing_unit,
        baseline = %typography.baseline,
        dyslexic = typography.dyslexic,
        "typography resolved"
    );

    let t = &mut tokens.tokens;
    t.font_size_base = typography.font_size_base;
    t.spacing_unit = typography.spacing_unit;
    t.contrast = typography.baseline;
    t.modes.dyslexic = typography.dyslexic;
    if typography.dyslexic {
        t.font_family = DYSLEXIA_FONT_FAMILY;
    }

    tokens.mark(&[TokenName::FontSizeBase, TokenName::SpacingUnit]);
    if typography.dyslexic {
        tokens.mark(&[TokenName::FontFamily]);
    }
}

fn apply_theme(ctx: &StageContext, tokens: &mut TokenBuilder) {
    let theme = catalog::preset(ctx.taste);
    tracing::debug!(taste = %theme.taste, "theme preset selected");
    tokens.set_theme(theme);
}

fn apply_environment(ctx: &StageContext, tokens: &mut TokenBuilder) {
    let env = EnvironmentMode::classify(ctx.battery_percent, ctx.ambient_lux);
    tracing::debug!(
        battery = ?ctx.battery_percent,
        lux = ?ctx.ambient_lux,
        power_saving = env.power_saving,
        color_mode = %env.color_mode,
        "environment classified"
    );

    let t = &mut tokens.tokens;
    t.modes.power_saving = env.power_saving;
    t.color_mode = env.color_mode;
    if env.color_mode.is_dark() {
        t.background = DARK_PALETTE.background;
        t.surface = DARK_PALETTE.surface;
        t.text = DARK_PALETTE.text;
        t.border = DARK_PALETTE.border;
        t.shadow = DARK_PALETTE.shadow;
        tokens.mark(&[
            TokenName::BgColor,
            TokenName::SurfaceColor,
            TokenName::TextColor,
            TokenName::BorderColor,
            TokenName::Shadow,
        ]);
    }
}

fn apply_contrast(ctx: &StageContext, tokens: &mut TokenBuilder) {
    let t = &mut tokens.tokens;
    let decision = ContrastDecision::resolve(t.contrast, is_bright(ctx.ambient_lux));
    tracing::debug!(level = %decision.level, cause = ?decision.cause, "contrast resolved");

    t.contrast = decision.level;
    t.contrast_cause = decision.cause;
    if !decision.level.is_high() {
        return;
    }

    let ink = forced_ink(t.color_mode);
    t.text = ink;
    t.border = ink;
    let boost = ctx.minimal_border_boost && ctx.taste == Taste::Minimal && decision.age_driven();
    if boost {
        t.border_width = MINIMAL_HIGH_CONTRAST_BORDER_WIDTH;
    }

    tokens.mark(&[TokenName::TextColor, TokenName::BorderColor]);
    if boost {
        tokens.mark(&[TokenName::BorderWidth]);
    }
}

/// Token state captured after one stage ran.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub tokens: TokenSet,
    /// Tokens this stage wrote, including ones rewritten with the value
    /// they already had.
    pub written: Vec<TokenName>,
}

/// Maps inputs to tokens under a fixed configuration.
///
/// Stateless: a resolver can be shared freely and `resolve` is safe to call
/// from anywhere.
///
/// ```rust
/// use attune_tokens::{ContrastLevel, Inputs, Resolver, Taste};
///
/// let resolver = Resolver::default();
/// let tokens = resolver.resolve(&Inputs::new(60, Taste::Bold).with_battery(50).with_lux(500));
/// assert_eq!(tokens.font_size_base, 19.0);
/// assert_eq!(tokens.contrast, ContrastLevel::High);
/// assert_eq!(tokens.text.to_string(), "#000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Recomputes the full token set from scratch.
    pub fn resolve(&self, inputs: &Inputs) -> TokenSet {
        let ctx = StageContext::new(inputs, &self.config);
        let mut builder = TokenBuilder::new();
        for stage in Stage::ORDER {
            stage.apply(&ctx, &mut builder);
        }
        builder.build()
    }

    /// Resolves and hands the result to a sink.
    pub fn resolve_into<S: TokenSink + ?Sized>(&self, inputs: &Inputs, sink: &mut S) -> TokenSet {
        let tokens = self.resolve(inputs);
        sink.apply(&tokens);
        tokens
    }

    /// Resolves while recording the token state after every stage.
    ///
    /// The last snapshot equals [`resolve`](Resolver::resolve)'s result.
    pub fn trace(&self, inputs: &Inputs) -> Vec<StageSnapshot> {
        let ctx = StageContext::new(inputs, &self.config);
        let mut builder = TokenBuilder::new();
        let mut snapshots = Vec::with_capacity(Stage::ORDER.len());

        for stage in Stage::ORDER {
            stage.apply(&ctx, &mut builder);
            snapshots.push(StageSnapshot {
                stage,
                written: builder.take_written(),
                tokens: builder.current().clone(),
            });
        }
        snapshots
    }
}

/// Resolves with the default (extended) configuration.
pub fn resolve_tokens(inputs: &Inputs) -> TokenSet {
    Resolver::default().resolve(inputs)
}
