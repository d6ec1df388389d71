//! Common configuration helpers shared between tundra and tundra-cli.

mod component_key;
mod path;
mod vars;

pub use component_key::ComponentKey;
pub use path::is_yaml_file;
pub use vars::{InterpolationResult, interpolate};

use std::path::Path;

use snafu::prelude::*;

use crate::error::{ConfigError, EnvInterpolationSnafu, ReadFileSnafu};

/// Read a configuration file and interpolate environment variables.
///
/// This is the shared front half of every YAML load: the caller parses the
/// returned text with its own serde type. Interpolation errors are
/// accumulated so the user sees all missing variables at once.
pub fn read_interpolated(path: &Path) -> Result<String, ConfigError> {
    let contents = std::fs::read_to_string(path).context(ReadFileSnafu { path })?;

    let result = interpolate(&contents);
    ensure!(
        result.is_ok(),
        EnvInterpolationSnafu {
            message: result.errors.join("\n"),
        }
    );

    Ok(result.text)
}
