//! Command-line definition and execution.
//!
//! The CLI is a binding layer over `attune-tokens`: it reads raw control
//! values from flags, environment variables and profile files, resolves
//! them, and applies the result to a sink chosen by `--output`.
//!
//! ```text
//! attune resolve --age 62 --taste bold --battery 15      # CSS when piped
//! attune -o text resolve --age 30 --lux 120              # styled readout
//! attune -o json explain --age 70 --taste minimal        # per-stage changes
//! attune presets                                         # the catalog
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use attune_tokens::{
    catalog, CssVariables, Inputs, Profile, RawInputs, Readout, Resolver, ResolverConfig, Taste,
    TokenSet, TokenSink,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::output::{serialize_structured, OutputDestination, OutputMode};
use crate::render::{self, ExplainStep};

/// Resolve adaptive style tokens from user and environment inputs.
#[derive(Debug, Parser)]
#[command(name = "attune", version, about)]
pub struct Cli {
    /// Resolver config file (YAML)
    #[arg(long, global = true, env = "ATTUNE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Capability profile; overrides the config file
    #[arg(long, global = true, value_name = "PROFILE")]
    pub profile: Option<Profile>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Write output to a file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve tokens for the given inputs
    Resolve(InputArgs),
    /// Show what each override stage changed
    Explain(InputArgs),
    /// List the theme presets
    Presets,
}

/// Raw inputs, exactly as typed. Malformed numbers are treated as absent.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Age in years
    #[arg(long, env = "ATTUNE_AGE", value_name = "YEARS", allow_negative_numbers = true)]
    pub age: Option<String>,

    /// Aesthetic preference: minimal, bold, playful or corporate
    #[arg(long, env = "ATTUNE_TASTE", value_name = "TASTE")]
    pub taste: Option<String>,

    /// Enable dyslexia accommodation (optionally =false)
    #[arg(
        long,
        env = "ATTUNE_DYSLEXIC",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub dyslexic: Option<String>,

    /// Battery charge in percent
    #[arg(long, env = "ATTUNE_BATTERY", value_name = "PERCENT", allow_negative_numbers = true)]
    pub battery: Option<String>,

    /// Ambient light in lux
    #[arg(long, env = "ATTUNE_LUX", value_name = "LUX", allow_negative_numbers = true)]
    pub lux: Option<String>,

    /// Input profile file (YAML, or JSON by extension); flags override it
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,
}

impl InputArgs {
    /// Raw values from the profile file, overlaid with flags.
    pub fn raw(&self) -> Result<RawInputs> {
        let base = match &self.inputs {
            Some(path) => load_raw_inputs(path)?,
            None => RawInputs::default(),
        };
        Ok(base.merge(RawInputs {
            age: self.age.clone(),
            taste: self.taste.clone(),
            dyslexic: self.dyslexic.clone(),
            battery: self.battery.clone(),
            lux: self.lux.clone(),
        }))
    }
}

/// Reads a raw input profile.
pub fn load_raw_inputs(path: &Path) -> Result<RawInputs> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let raw = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse inputs {}", path.display()))?
    } else if content.trim().is_empty() {
        RawInputs::default()
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse inputs {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), "loaded input profile");
    Ok(raw)
}

impl Cli {
    /// Config file (if any) with the `--profile` override applied.
    pub fn resolver_config(&self) -> Result<ResolverConfig> {
        let config = match &self.config {
            Some(path) => ResolverConfig::from_file(path)?,
            None => ResolverConfig::default(),
        };
        Ok(match self.profile {
            Some(profile) => config.with_profile(profile),
            None => config,
        })
    }

    pub fn destination(&self) -> OutputDestination {
        match &self.out {
            Some(path) => OutputDestination::File(path.clone()),
            None => OutputDestination::Stdout,
        }
    }
}

/// Runs the parsed command and returns its rendered output.
pub fn execute(cli: &Cli) -> Result<String> {
    let resolver = Resolver::new(cli.resolver_config()?);
    let mode = cli.output.resolve_auto();
    tracing::debug!(?mode, config = ?resolver.config(), "executing");

    match &cli.command {
        Command::Resolve(args) => {
            let inputs = args.raw()?.normalize();
            resolve(&resolver, &inputs, mode)
        }
        Command::Explain(args) => {
            let inputs = args.raw()?.normalize();
            explain(&resolver, &inputs, mode)
        }
        Command::Presets => presets(&resolver, mode),
    }
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    inputs: &'a Inputs,
    tokens: &'a TokenSet,
    readout: Readout,
}

fn resolve(resolver: &Resolver, inputs: &Inputs, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => {
            let tokens = resolver.resolve(inputs);
            let readout = Readout::from_tokens(&tokens, inputs);
            Ok(render::readout(&readout, tokens.primary, tokens.background))
        }
        OutputMode::Json | OutputMode::Yaml => {
            let tokens = resolver.resolve(inputs);
            let data = ResolveOutput {
                inputs,
                readout: Readout::from_tokens(&tokens, inputs),
                tokens: &tokens,
            };
            Ok(serialize_structured(&data, mode)?)
        }
        OutputMode::Css | OutputMode::Auto => {
            let mut sink = CssVariables::new();
            resolver.resolve_into(inputs, &mut sink);
            Ok(sink.into_css())
        }
    }
}

fn explain(resolver: &Resolver, inputs: &Inputs, mode: OutputMode) -> Result<String> {
    let steps: Vec<ExplainStep> = resolver
        .trace(inputs)
        .iter()
        .map(ExplainStep::from_snapshot)
        .collect();

    if mode.is_structured() {
        Ok(serialize_structured(&steps, mode)?)
    } else {
        Ok(render::explain(&steps))
    }
}

fn presets(resolver: &Resolver, mode: OutputMode) -> Result<String> {
    let themes = catalog::all();
    match mode {
        OutputMode::Text => Ok(render::presets(&themes)),
        OutputMode::Json | OutputMode::Yaml => Ok(serialize_structured(&themes, mode)?),
        OutputMode::Css | OutputMode::Auto => {
            // One block per preset, resolved at the fallback age.
            let mut css = String::new();
            for taste in Taste::ALL {
                let mut sink = CssVariables::with_selector(format!("[data-taste=\"{}\"]", taste));
                sink.apply(&resolver.resolve(&Inputs {
                    taste,
                    ..Inputs::default()
                }));
                css.push_str(sink.css());
            }
            Ok(css)
        }
    }
}

/// Parses `args` and runs the command, returning output instead of writing it.
pub fn run_to_string<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    execute(&cli)
}
