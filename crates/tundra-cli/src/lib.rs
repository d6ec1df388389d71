//! tundra-cli: Container build-spec tool for tundra pipelines.
//!
//! This crate prepares the declarative build spec an external
//! container-build tool consumes when packaging pipeline components into
//! images. It loads an existing spec file or generates a default one; the
//! image build itself is out of scope.

pub mod buildspec;
pub mod error;

// Re-export main types
pub use buildspec::{
    BUILD_API_VERSION, BUILD_SPEC_FILENAME, BuildSpec, DEFAULT_BUILD_CONTEXT,
    DEFAULT_DOCKERFILE_NAME,
};
pub use error::{BuildSpecError, CliError};
