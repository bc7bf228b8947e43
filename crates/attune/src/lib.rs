//! # attune
//!
//! Command-line binding for [`attune_tokens`]. Raw control values arrive as
//! flags, `ATTUNE_*` environment variables or an input profile file; the
//! resolved token set is written as CSS custom properties, a styled
//! readout, or JSON/YAML.
//!
//! The library half exists so commands can be exercised in-process:
//!
//! ```
//! let css = attune::cli::run_to_string(["attune", "-o", "css", "resolve", "--age", "62"]).unwrap();
//! assert!(css.contains("--font-size-base: 19.2px;"));
//! ```

pub mod cli;
pub mod logging;
pub mod output;
pub mod render;

pub use cli::{execute, run_to_string, Cli, Command, InputArgs};
pub use output::{OutputDestination, OutputMode};
