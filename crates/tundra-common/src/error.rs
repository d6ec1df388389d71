//! Common error types shared between tundra and tundra-cli.

use snafu::prelude::*;
use std::path::PathBuf;

/// Errors that can occur while reading and preparing configuration files.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    /// Environment variable interpolation failed.
    #[snafu(display("Environment variable interpolation failed:\n{message}"))]
    EnvInterpolation { message: String },

    /// Failed to read a configuration file.
    #[snafu(display("Failed to read {}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
