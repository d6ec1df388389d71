//! tundra: CLI for preparing container build specs for pipeline components.
//!
//! Ensures a build spec file exists (loading it if present, generating a
//! default otherwise) so an external container-build tool can package the
//! pipeline's components into an image.

use clap::Parser;
use snafu::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tundra_cli::buildspec::{
    BUILD_SPEC_FILENAME, BuildSpec, DEFAULT_BUILD_CONTEXT, DEFAULT_DOCKERFILE_NAME,
};
use tundra_cli::error::{BuildSpecSnafu, CliError};
use tundra_common::is_yaml_file;

/// Container build-spec tool for tundra pipelines.
#[derive(Parser, Debug)]
#[command(name = "tundra")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the build spec file.
    #[arg(short, long, default_value = BUILD_SPEC_FILENAME)]
    build_spec: PathBuf,

    /// Target image tag. Required when no build spec file exists yet.
    #[arg(short, long)]
    target_image: Option<String>,

    /// Build context directory, used when generating a new spec.
    #[arg(long, default_value = DEFAULT_BUILD_CONTEXT)]
    build_context: String,

    /// Dockerfile name inside the build context, used when generating.
    #[arg(long, default_value = DEFAULT_DOCKERFILE_NAME)]
    dockerfile: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Validate the resulting spec and print it without reporting paths to
    /// the external build tool.
    #[arg(long)]
    dry_run: bool,
}

#[snafu::report]
fn main() -> Result<(), CliError> {
    let args = Args::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if !is_yaml_file(&args.build_spec) {
        warn!(
            "Build spec path {} does not have a YAML extension",
            args.build_spec.display()
        );
    }

    let spec = BuildSpec::with_options(
        &args.build_spec,
        args.target_image.as_deref(),
        &args.build_context,
        &args.dockerfile,
    )
    .context(BuildSpecSnafu)?;

    info!("Build spec: {}", spec.filename().display());
    info!("  Target image: {}", spec.target_image());
    info!("  Build context: {}", spec.build_context());
    info!(
        "  Dockerfile: {}",
        spec.file().build.artifacts[0].docker.dockerfile
    );

    if args.dry_run {
        info!("Dry run mode - build spec is valid");
        return Ok(());
    }

    // The external build tool picks the file up from here.
    println!("{}", spec.filename().display());

    Ok(())
}
