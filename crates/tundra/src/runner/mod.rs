//! Runner contract: launcher selection and the abstract pipeline runner.
//!
//! A concrete runner configures a [`LauncherRegistry`] with its ordered
//! launcher preference list and optional per-component platform configs.
//! Dispatch is a deterministic, greedy, first-match search: declared
//! platform configs are tried in declaration order before the unconfigured
//! fallback, and within each candidate config launchers are probed in
//! preference order.

mod launcher;

pub use launcher::{ComponentLauncher, PlatformConfig};

use indexmap::IndexMap;
use snafu::prelude::*;
use std::any::TypeId;
use std::collections::HashSet;
use tracing::debug;
use tundra_common::ComponentKey;

use crate::component::Component;
use crate::error::{
    DuplicatePlatformConfigSnafu, EmptyLauncherListSnafu, EmptyPlatformConfigKeySnafu,
    NoCapableLauncherSnafu, RunnerError,
};
use crate::pipeline::Pipeline;

/// The launcher and platform config selected for one component.
#[derive(Debug, Clone, Copy)]
pub struct LaunchInfo<'a> {
    pub launcher: &'a dyn ComponentLauncher,
    pub platform_config: Option<&'a dyn PlatformConfig>,
}

/// A runner's configured launch strategy: an ordered launcher preference
/// list plus optional per-component platform configs.
///
/// Both orders are significant and preserved exactly as configured.
#[derive(Debug)]
pub struct LauncherRegistry {
    launchers: Vec<Box<dyn ComponentLauncher>>,
    platform_configs: IndexMap<ComponentKey, Vec<Box<dyn PlatformConfig>>>,
}

impl LauncherRegistry {
    /// Validate and build a registry.
    ///
    /// Fails if the launcher list is empty, a platform-config key is empty,
    /// or two configs of the same concrete type are attached to one
    /// component.
    pub fn new(
        launchers: Vec<Box<dyn ComponentLauncher>>,
        platform_configs: IndexMap<ComponentKey, Vec<Box<dyn PlatformConfig>>>,
    ) -> Result<Self, RunnerError> {
        ensure!(!launchers.is_empty(), EmptyLauncherListSnafu);

        for (key, configs) in &platform_configs {
            ensure!(!key.is_empty(), EmptyPlatformConfigKeySnafu);

            let mut seen = HashSet::new();
            for config in configs {
                let type_id: TypeId = config.as_any().type_id();
                ensure!(
                    seen.insert(type_id),
                    DuplicatePlatformConfigSnafu {
                        component: key.clone(),
                    }
                );
            }
        }

        Ok(Self {
            launchers,
            platform_configs,
        })
    }

    /// Build a registry with no per-component platform configs.
    pub fn with_launchers(
        launchers: Vec<Box<dyn ComponentLauncher>>,
    ) -> Result<Self, RunnerError> {
        Self::new(launchers, IndexMap::new())
    }

    /// The configured launcher preference list.
    pub fn launchers(&self) -> &[Box<dyn ComponentLauncher>] {
        &self.launchers
    }

    /// Find the first launcher (and matching platform config) capable of
    /// launching the component's executor.
    ///
    /// Candidate configs are the component's declared configs in declaration
    /// order, followed by the unconfigured fallback. For each candidate,
    /// launchers are probed in preference order; the first match wins.
    pub fn find_component_launch_info<'a>(
        &'a self,
        component: &Component,
    ) -> Result<LaunchInfo<'a>, RunnerError> {
        let declared = self
            .platform_configs
            .get(component.id())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let candidates = declared
            .iter()
            .map(|config| Some(config.as_ref()))
            .chain(std::iter::once(None));

        for platform_config in candidates {
            for launcher in &self.launchers {
                debug!(
                    component = %component.id(),
                    launcher = launcher.name(),
                    config = ?platform_config,
                    "probing launcher"
                );
                if launcher.can_launch(component.executor_spec(), platform_config) {
                    debug!(
                        component = %component.id(),
                        launcher = launcher.name(),
                        "launcher selected"
                    );
                    return Ok(LaunchInfo {
                        launcher: launcher.as_ref(),
                        platform_config,
                    });
                }
            }
        }

        NoCapableLauncherSnafu {
            component: component.id().clone(),
        }
        .fail()
    }
}

/// Abstract base for pipeline runners.
///
/// A concrete orchestrator supplies its launcher registry (the fixed,
/// ordered strategy list) and implements `run` for its platform. The
/// launcher lookup is shared by all runners.
pub trait PipelineRunner {
    /// Platform-specific result of a run.
    type Output;
    /// Platform-specific failure of a run.
    type Error;

    /// The runner's configured launch strategy.
    fn registry(&self) -> &LauncherRegistry;

    /// Run the logical pipeline on this runner's platform.
    fn run(&mut self, pipeline: &Pipeline) -> Result<Self::Output, Self::Error>;

    /// Select a launcher and platform config for one component.
    fn find_component_launch_info<'a>(
        &'a self,
        component: &Component,
    ) -> Result<LaunchInfo<'a>, RunnerError> {
        self.registry().find_component_launch_info(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::standard::EXAMPLES;
    use crate::channel::Channel;
    use crate::component::schema::{ChannelDecl, ComponentSpecSchema};
    use crate::component::{ComponentSpec, ExecutorSpec};
    use std::any::Any;

    const SCHEMA: ComponentSpecSchema = ComponentSpecSchema {
        component_type: "test.components.PassThrough",
        parameters: &[],
        inputs: &[ChannelDecl {
            name: "input_data",
            artifact_type: EXAMPLES,
        }],
        outputs: &[],
    };

    fn component(id: &str, executor: ExecutorSpec) -> Component {
        let spec = ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), Channel::of_type(EXAMPLES))]),
            IndexMap::new(),
        )
        .unwrap();
        Component::new(ComponentKey::new(id), executor, spec).unwrap()
    }

    /// Launcher that only accepts in-process executors.
    #[derive(Debug)]
    struct InProcessLauncher;

    impl ComponentLauncher for InProcessLauncher {
        fn name(&self) -> &'static str {
            "in_process"
        }

        fn can_launch(
            &self,
            executor: &ExecutorSpec,
            _platform_config: Option<&dyn PlatformConfig>,
        ) -> bool {
            matches!(executor, ExecutorSpec::InProcess { .. })
        }
    }

    /// Launcher that only accepts container executors under a DockerConfig.
    #[derive(Debug)]
    struct DockerLauncher;

    impl ComponentLauncher for DockerLauncher {
        fn name(&self) -> &'static str {
            "docker"
        }

        fn can_launch(
            &self,
            executor: &ExecutorSpec,
            platform_config: Option<&dyn PlatformConfig>,
        ) -> bool {
            let config_ok = match platform_config {
                None => true,
                Some(config) => config.as_any().is::<DockerConfig>(),
            };
            config_ok && matches!(executor, ExecutorSpec::Container { .. })
        }
    }

    #[derive(Debug)]
    struct DockerConfig;

    impl PlatformConfig for DockerConfig {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct KubernetesConfig;

    impl PlatformConfig for KubernetesConfig {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_empty_launcher_list_rejected() {
        let err = LauncherRegistry::with_launchers(vec![]).unwrap_err();
        assert!(matches!(err, RunnerError::EmptyLauncherList));
    }

    #[test]
    fn test_empty_config_key_rejected() {
        let err = LauncherRegistry::new(
            vec![Box::new(InProcessLauncher)],
            IndexMap::from([(
                ComponentKey::new(""),
                vec![Box::new(DockerConfig) as Box<dyn PlatformConfig>],
            )]),
        )
        .unwrap_err();
        assert!(matches!(err, RunnerError::EmptyPlatformConfigKey));
    }

    #[test]
    fn test_duplicate_config_types_rejected() {
        let err = LauncherRegistry::new(
            vec![Box::new(InProcessLauncher)],
            IndexMap::from([(
                ComponentKey::new("trainer"),
                vec![
                    Box::new(DockerConfig) as Box<dyn PlatformConfig>,
                    Box::new(DockerConfig) as Box<dyn PlatformConfig>,
                ],
            )]),
        )
        .unwrap_err();

        match err {
            RunnerError::DuplicatePlatformConfig { component } => {
                assert_eq!(component.id(), "trainer");
            }
            other => panic!("expected DuplicatePlatformConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_distinct_config_types_accepted() {
        LauncherRegistry::new(
            vec![Box::new(InProcessLauncher)],
            IndexMap::from([(
                ComponentKey::new("trainer"),
                vec![
                    Box::new(DockerConfig) as Box<dyn PlatformConfig>,
                    Box::new(KubernetesConfig) as Box<dyn PlatformConfig>,
                ],
            )]),
        )
        .unwrap();
    }

    #[test]
    fn test_first_capable_launcher_wins() {
        let registry = LauncherRegistry::with_launchers(vec![
            Box::new(InProcessLauncher),
            Box::new(DockerLauncher),
        ])
        .unwrap();

        let component = component("c", ExecutorSpec::container("img", vec![]));
        let info = registry.find_component_launch_info(&component).unwrap();
        assert_eq!(info.launcher.name(), "docker");
        assert!(info.platform_config.is_none());
    }

    #[test]
    fn test_no_capable_launcher_names_component() {
        let registry =
            LauncherRegistry::with_launchers(vec![Box::new(DockerLauncher)]).unwrap();

        let component = component("hello", ExecutorSpec::in_process("noop"));
        let err = registry.find_component_launch_info(&component).unwrap_err();

        match err {
            RunnerError::NoCapableLauncher { component } => {
                assert_eq!(component.id(), "hello");
            }
            other => panic!("expected NoCapableLauncher, got {other:?}"),
        }
    }

    #[test]
    fn test_declared_config_preferred_over_fallback() {
        let registry = LauncherRegistry::new(
            vec![Box::new(DockerLauncher)],
            IndexMap::from([(
                ComponentKey::new("c"),
                vec![Box::new(DockerConfig) as Box<dyn PlatformConfig>],
            )]),
        )
        .unwrap();

        let component = component("c", ExecutorSpec::container("img", vec![]));
        let info = registry.find_component_launch_info(&component).unwrap();
        assert!(info.platform_config.is_some());
    }
}
