//! Launcher and platform-config seams.
//!
//! Concrete launchers live with orchestrator implementations; this crate
//! only defines the capability interface the runner contract dispatches
//! through.

use std::any::Any;
use std::fmt;

use crate::component::ExecutorSpec;

/// Execution-environment configuration attached to a specific component
/// (resource requests, node selectors, and the like).
///
/// Implementations are opaque to the runner; `as_any` exists so the runner
/// can compare concrete types when validating that at most one config of
/// each type is attached to a component.
pub trait PlatformConfig: fmt::Debug + Send + Sync + 'static {
    /// The concrete config, for downcasting by the launcher that accepts it.
    fn as_any(&self) -> &dyn Any;
}

/// A strategy capable of executing a component's executor on some runtime
/// platform.
///
/// A runner holds an ordered preference list of launchers and asks each in
/// turn whether it can launch a given executor under a given platform
/// config.
pub trait ComponentLauncher: fmt::Debug + Send + Sync {
    /// Launcher name, for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this launcher can execute the given executor binding under
    /// the given platform config.
    fn can_launch(
        &self,
        executor: &ExecutorSpec,
        platform_config: Option<&dyn PlatformConfig>,
    ) -> bool;
}
