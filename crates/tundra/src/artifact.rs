//! Artifact types and artifact handles.
//!
//! An [`Artifact`] is a typed handle to a piece of pipeline data. The handle
//! carries no payload: actual storage and lineage tracking belong to the
//! orchestration engine, which is an external collaborator of this crate.

use std::fmt;

/// A semantic artifact type, declared once and referenced by channels and
/// component schemas.
///
/// Types are const-constructible so component crates can declare them in
/// static schema tables. A type may carry default split names, used when an
/// output channel is minted without explicit artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactType {
    name: &'static str,
    default_splits: &'static [&'static str],
}

impl ArtifactType {
    /// Declare an artifact type with no default splits.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default_splits: &[],
        }
    }

    /// Declare an artifact type whose default channels carry one artifact
    /// per split.
    pub const fn with_default_splits(
        name: &'static str,
        default_splits: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            default_splits,
        }
    }

    /// The type name, e.g. "Examples".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Split names minted into default output channels of this type.
    pub fn default_splits(&self) -> &'static [&'static str] {
        self.default_splits
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Standard artifact types understood by stock components.
pub mod standard {
    use super::ArtifactType;

    /// Example records, conventionally split into train and eval sets.
    pub const EXAMPLES: ArtifactType =
        ArtifactType::with_default_splits("Examples", &["train", "eval"]);
}

/// A handle to a single artifact of a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    artifact_type: ArtifactType,
    split: Option<String>,
    uri: Option<String>,
}

impl Artifact {
    /// Create a fresh handle of the given type.
    pub fn new(artifact_type: ArtifactType) -> Self {
        Self {
            artifact_type,
            split: None,
            uri: None,
        }
    }

    /// Attach a split name (e.g. "train").
    pub fn with_split(mut self, split: impl Into<String>) -> Self {
        self.split = Some(split.into());
        self
    }

    /// Attach a resolved storage URI.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn artifact_type(&self) -> ArtifactType {
        self.artifact_type
    }

    pub fn split(&self) -> Option<&str> {
        self.split.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
