//! Error types for the container build-spec tool.

use snafu::prelude::*;
use std::path::PathBuf;
use tundra_common::ConfigError;

/// Errors that can occur while loading or generating a build spec.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BuildSpecError {
    /// The build spec must contain exactly one build artifact.
    #[snafu(display(
        "Build spec must contain exactly one artifact, found {count}; \
         multiple artifacts are not supported"
    ))]
    MultipleArtifacts { count: usize },

    /// Generating a new build spec requires a target image.
    #[snafu(display(
        "No target image given and no existing build spec file at {}",
        path.display()
    ))]
    MissingTargetImage { path: PathBuf },

    /// Failed to read or interpolate the build spec file.
    #[snafu(display("Failed to load build spec from {}", path.display()))]
    LoadSpec {
        path: PathBuf,
        source: ConfigError,
    },

    /// Failed to parse the build spec YAML.
    #[snafu(display("Failed to parse build spec {}", path.display()))]
    ParseSpec {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to serialize the build spec to YAML.
    #[snafu(display("Failed to serialize build spec"))]
    SerializeSpec { source: serde_yaml::Error },

    /// Failed to write the build spec file.
    #[snafu(display("Failed to write build spec to {}", path.display()))]
    WriteSpec {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ============ Top-level CLI Errors ============

/// Top-level error returned by the CLI entry point.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CliError {
    /// Build spec error.
    #[snafu(display("Build spec error"))]
    BuildSpec { source: BuildSpecError },
}
