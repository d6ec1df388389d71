//! Typed channels wiring component outputs to downstream inputs.

use snafu::prelude::*;

use crate::artifact::{Artifact, ArtifactType};
use crate::error::{ComponentError, EmptyChannelSnafu, MixedArtifactTypesSnafu};

/// A typed handle to one or more artifacts of a single artifact type.
///
/// A channel is produced by one component and consumed by zero or more
/// downstream components. It carries no data, only handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    artifact_type: ArtifactType,
    artifacts: Vec<Artifact>,
}

impl Channel {
    /// Build a channel from concrete artifacts.
    ///
    /// The list must be non-empty and homogeneous: every artifact must share
    /// the type of the first.
    pub fn from_artifacts(artifacts: Vec<Artifact>) -> Result<Self, ComponentError> {
        let first = artifacts.first().context(EmptyChannelSnafu)?;
        let artifact_type = first.artifact_type();

        for artifact in &artifacts {
            ensure!(
                artifact.artifact_type() == artifact_type,
                MixedArtifactTypesSnafu {
                    expected: artifact_type.name(),
                    found: artifact.artifact_type().name(),
                }
            );
        }

        Ok(Self {
            artifact_type,
            artifacts,
        })
    }

    /// Mint a default channel of the given type.
    ///
    /// Produces one fresh artifact per default split of the type, or a
    /// single split-less artifact if the type declares none. Used when a
    /// component instance does not supply one of its declared outputs.
    pub fn of_type(artifact_type: ArtifactType) -> Self {
        let splits = artifact_type.default_splits();
        let artifacts = if splits.is_empty() {
            vec![Artifact::new(artifact_type)]
        } else {
            splits
                .iter()
                .map(|split| Artifact::new(artifact_type).with_split(*split))
                .collect()
        };

        Self {
            artifact_type,
            artifacts,
        }
    }

    /// The artifact type carried by this channel.
    pub fn artifact_type(&self) -> ArtifactType {
        self.artifact_type
    }

    /// The artifact handles in this channel.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::standard::EXAMPLES;

    #[test]
    fn test_from_artifacts() {
        let channel = Channel::from_artifacts(vec![
            Artifact::new(EXAMPLES).with_split("train"),
            Artifact::new(EXAMPLES).with_split("eval"),
        ])
        .unwrap();

        assert_eq!(channel.artifact_type(), EXAMPLES);
        assert_eq!(channel.artifacts().len(), 2);
    }

    #[test]
    fn test_empty_rejected() {
        let err = Channel::from_artifacts(vec![]).unwrap_err();
        assert!(matches!(err, ComponentError::EmptyChannel));
    }

    #[test]
    fn test_mixed_types_rejected() {
        const MODEL: ArtifactType = ArtifactType::new("Model");

        let err = Channel::from_artifacts(vec![
            Artifact::new(EXAMPLES).with_split("train"),
            Artifact::new(MODEL),
        ])
        .unwrap_err();

        match err {
            ComponentError::MixedArtifactTypes { expected, found } => {
                assert_eq!(expected, "Examples");
                assert_eq!(found, "Model");
            }
            other => panic!("expected MixedArtifactTypes, got {other:?}"),
        }
    }

    #[test]
    fn test_of_type_mints_default_splits() {
        let channel = Channel::of_type(EXAMPLES);

        let splits: Vec<_> = channel.artifacts().iter().map(|a| a.split()).collect();
        assert_eq!(splits, vec![Some("train"), Some("eval")]);
    }

    #[test]
    fn test_of_type_without_splits() {
        const MODEL: ArtifactType = ArtifactType::new("Model");

        let channel = Channel::of_type(MODEL);
        assert_eq!(channel.artifacts().len(), 1);
        assert_eq!(channel.artifacts()[0].split(), None);
    }
}
