//! Executor bindings.

use std::fmt;

/// The executor a component binds to, dispatched by an orchestrator through
/// a capable launcher.
///
/// Two forms exist: an in-process executor referenced by registered name,
/// and a container executor described by image and command. Launchers
/// inspect the form (and the attached platform config) when reporting
/// whether they can launch a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorSpec {
    /// An executor that runs inside the orchestrator process.
    InProcess { executor: String },
    /// An executor packaged as a container image.
    Container { image: String, command: Vec<String> },
}

impl ExecutorSpec {
    /// Bind to an in-process executor by registered name.
    pub fn in_process(executor: impl Into<String>) -> Self {
        Self::InProcess {
            executor: executor.into(),
        }
    }

    /// Bind to a container executor.
    pub fn container(image: impl Into<String>, command: Vec<String>) -> Self {
        Self::Container {
            image: image.into(),
            command,
        }
    }
}

impl fmt::Display for ExecutorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutorSpec::InProcess { executor } => write!(f, "in-process:{executor}"),
            ExecutorSpec::Container { image, .. } => write!(f, "container:{image}"),
        }
    }
}
