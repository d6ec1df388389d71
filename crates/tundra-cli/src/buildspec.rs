//! Build specification helper.
//!
//! A build spec is the declarative description of a container image build
//! (target image, build context, Dockerfile) consumed by an external
//! container-build tool. The helper is one-shot: it loads an existing spec
//! file, or synthesizes a default one and persists it.

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use tundra_common::config::read_interpolated;

use crate::error::{
    BuildSpecError, LoadSpecSnafu, MissingTargetImageSnafu, MultipleArtifactsSnafu, ParseSpecSnafu,
    SerializeSpecSnafu, WriteSpecSnafu,
};

/// Default build spec filename.
pub const BUILD_SPEC_FILENAME: &str = "build.yaml";
/// Default build context directory.
pub const DEFAULT_BUILD_CONTEXT: &str = ".";
/// Default Dockerfile name inside the build context.
pub const DEFAULT_DOCKERFILE_NAME: &str = "Dockerfile";
/// API version written into generated build specs.
pub const BUILD_API_VERSION: &str = "skaffold/v1beta2";

/// On-disk build spec structure, as consumed by the external build tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSpecFile {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub build: BuildSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    pub artifacts: Vec<BuildArtifact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildArtifact {
    /// Target image tag.
    pub image: String,
    /// Build context directory.
    pub workspace: String,
    pub docker: DockerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerSettings {
    pub dockerfile: String,
}

/// Build specification: loaded from an existing file, or generated from
/// defaults and persisted.
///
/// The loaded spec must contain exactly one build artifact; that artifact's
/// workspace becomes the build context and its image the target image.
#[derive(Debug, Clone)]
pub struct BuildSpec {
    filename: PathBuf,
    build_context: String,
    target_image: String,
    spec: BuildSpecFile,
}

impl BuildSpec {
    /// Load the spec at `filename`, or generate a default one with the
    /// standard build context and Dockerfile name.
    pub fn new(
        filename: impl Into<PathBuf>,
        target_image: Option<&str>,
    ) -> Result<Self, BuildSpecError> {
        Self::with_options(
            filename,
            target_image,
            DEFAULT_BUILD_CONTEXT,
            DEFAULT_DOCKERFILE_NAME,
        )
    }

    /// Load the spec at `filename`, or generate a default one with the
    /// given build context and Dockerfile name.
    ///
    /// When the file exists its contents win: a caller-supplied target
    /// image is ignored with a warning. When it does not exist, a target
    /// image is required.
    pub fn with_options(
        filename: impl Into<PathBuf>,
        target_image: Option<&str>,
        build_context: &str,
        dockerfile_name: &str,
    ) -> Result<Self, BuildSpecError> {
        let filename = filename.into();

        if filename.exists() {
            return Self::read_existing(filename, target_image);
        }

        let target_image = target_image.context(MissingTargetImageSnafu { path: &filename })?;
        Self::generate_default(filename, target_image, build_context, dockerfile_name)
    }

    /// Read and validate an existing build spec file.
    fn read_existing(
        filename: PathBuf,
        target_image: Option<&str>,
    ) -> Result<Self, BuildSpecError> {
        info!("Reading build spec from {}", filename.display());
        if let Some(ignored) = target_image {
            warn!(
                "Target image {} is not used; the build spec file {} wins. \
                 Update the image there instead.",
                ignored,
                filename.display()
            );
        }

        let contents = read_interpolated(&filename).context(LoadSpecSnafu { path: &filename })?;
        let spec: BuildSpecFile =
            serde_yaml::from_str(&contents).context(ParseSpecSnafu { path: &filename })?;

        ensure!(
            spec.build.artifacts.len() == 1,
            MultipleArtifactsSnafu {
                count: spec.build.artifacts.len(),
            }
        );

        let artifact = &spec.build.artifacts[0];
        Ok(Self {
            build_context: artifact.workspace.clone(),
            target_image: artifact.image.clone(),
            filename,
            spec,
        })
    }

    /// Synthesize a default build spec and persist it.
    fn generate_default(
        filename: PathBuf,
        target_image: &str,
        build_context: &str,
        dockerfile_name: &str,
    ) -> Result<Self, BuildSpecError> {
        let spec = BuildSpecFile {
            api_version: BUILD_API_VERSION.to_string(),
            kind: "Config".to_string(),
            build: BuildSection {
                artifacts: vec![BuildArtifact {
                    image: target_image.to_string(),
                    workspace: build_context.to_string(),
                    docker: DockerSettings {
                        dockerfile: dockerfile_name.to_string(),
                    },
                }],
            },
        };

        let yaml = serde_yaml::to_string(&spec).context(SerializeSpecSnafu)?;
        std::fs::write(&filename, yaml).context(WriteSpecSnafu { path: &filename })?;
        info!(
            "Generated default build spec at {} for image {}",
            filename.display(),
            target_image
        );

        Ok(Self {
            filename,
            build_context: build_context.to_string(),
            target_image: target_image.to_string(),
            spec,
        })
    }

    /// Path of the backing file.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Build context directory for the single artifact.
    pub fn build_context(&self) -> &str {
        &self.build_context
    }

    /// Target image tag for the single artifact.
    pub fn target_image(&self) -> &str {
        &self.target_image
    }

    /// The in-memory representation of the spec file.
    pub fn file(&self) -> &BuildSpecFile {
        &self.spec
    }
}
