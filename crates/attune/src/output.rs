//! Output mode control.
//!
//! [`OutputMode`] decides how a command's result is written: as a CSS
//! custom-property block, a styled human-readable readout, or serialized
//! data. [`OutputDestination`] decides where it goes.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
///
/// # Variants
///
/// - `Auto` - Detect terminal (TTY → Text, pipe → Css)
/// - `Css` - CSS custom properties, ready to paste into a stylesheet
/// - `Text` - Styled readout for humans
/// - `Json`, `Yaml` - Serialize the resolved data directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Auto-detect: TTY gets Text, pipe gets Css
    #[default]
    Auto,
    /// CSS custom properties
    Css,
    /// Human-readable readout
    Text,
    /// Serialize as JSON
    Json,
    /// Serialize as YAML
    Yaml,
}

impl OutputMode {
    /// Returns true if this is a structured output mode (JSON, YAML).
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }

    /// Resolves Auto mode to Text or Css based on TTY detection.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Text
                } else {
                    OutputMode::Css
                }
            }
            other => *other,
        }
    }
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Not a structured output mode")]
    NotStructured,
}

/// Serializes data to the specified structured format.
///
/// Returns an error if the output mode is not a structured mode.
pub fn serialize_structured<T: Serialize>(
    data: &T,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        _ => Err(SerializeError::NotStructured),
    }
}

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputDestination {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Writes text content to this destination.
    ///
    /// A trailing newline is added on stdout when the content lacks one.
    pub fn write_text(&self, content: &str) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                if content.ends_with('\n') {
                    write!(handle, "{}", content)
                } else {
                    writeln!(handle, "{}", content)
                }
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                std::fs::write(path, content)
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}
