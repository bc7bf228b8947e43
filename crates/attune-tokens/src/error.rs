//! Error types for configuration loading.
//!
//! Resolution itself cannot fail; only reading configuration from text or
//! disk can.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid YAML or has unknown keys.
    #[error("failed to parse config{}: {message}", location(path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
}

impl ConfigError {
    /// Attaches a source path to a parse error that does not have one yet.
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            ConfigError::Parse { path: None, message } => ConfigError::Parse {
                path: Some(new_path.into()),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            path: None,
            message: err.to_string(),
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
