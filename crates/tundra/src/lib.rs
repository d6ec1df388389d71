//! tundra: Pipeline component authoring and launcher dispatch.
//!
//! This crate provides the thin contract layer between pipeline authors and
//! orchestration engines:
//!
//! - `artifact` / `channel` - Typed artifact handles and the channels wiring
//!   component outputs to downstream inputs
//! - `component` - Static component schemas, validated spec instances, and
//!   executor bindings
//! - `pipeline` - Logical pipeline definitions
//! - `runner` - The launcher selection algorithm and the abstract runner
//!   every concrete orchestrator implements
//!
//! DAG execution, metadata, and artifact lineage are external collaborators:
//! a concrete [`PipelineRunner`] dispatches each component through the first
//! capable launcher, but what happens beyond dispatch is out of scope here.

pub mod artifact;
pub mod channel;
pub mod component;
pub mod error;
pub mod pipeline;
pub mod runner;

// Re-export commonly used items
pub use artifact::{Artifact, ArtifactType};
pub use channel::Channel;
pub use component::{Component, ComponentSpec, ExecutorSpec};
pub use error::{ComponentError, RunnerError};
pub use pipeline::Pipeline;
pub use runner::{ComponentLauncher, LaunchInfo, LauncherRegistry, PipelineRunner, PlatformConfig};

// Re-export from tundra-common
pub use tundra_common::ComponentKey;
