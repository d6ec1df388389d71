//! Component declaration: static schemas, validated specs, and component
//! instances.
//!
//! A component type declares its schema once (parameters, typed input and
//! output channels) as a [`ComponentSpecSchema`]. An instance binds concrete
//! channels and values through [`ComponentSpec::new`], then pairs the
//! validated spec with an id and an executor binding as a [`Component`] —
//! the unit an orchestration engine schedules.

mod executor;
pub mod schema;
mod spec;

pub use executor::ExecutorSpec;
pub use spec::ComponentSpec;

use indexmap::IndexMap;
use snafu::prelude::*;
use tundra_common::ComponentKey;

use crate::channel::Channel;
use crate::error::{ComponentError, EmptyComponentIdSnafu};

/// A named, typed unit of pipeline work.
///
/// Exposes its id, executor binding, and bound channels to the external
/// orchestration engine that schedules and executes it.
#[derive(Debug, Clone)]
pub struct Component {
    key: ComponentKey,
    executor: ExecutorSpec,
    spec: ComponentSpec,
}

impl Component {
    /// Create a component with an explicit id.
    pub fn new(
        key: ComponentKey,
        executor: ExecutorSpec,
        spec: ComponentSpec,
    ) -> Result<Self, ComponentError> {
        ensure!(!key.is_empty(), EmptyComponentIdSnafu);
        Ok(Self {
            key,
            executor,
            spec,
        })
    }

    /// Create a component whose id is derived from its schema's type name.
    pub fn with_default_key(
        executor: ExecutorSpec,
        spec: ComponentSpec,
    ) -> Result<Self, ComponentError> {
        let key = ComponentKey::from_qualified_name(spec.schema().component_type);
        Self::new(key, executor, spec)
    }

    /// The component's id within a pipeline.
    pub fn id(&self) -> &ComponentKey {
        &self.key
    }

    /// The executor this component binds to.
    pub fn executor_spec(&self) -> &ExecutorSpec {
        &self.executor
    }

    /// The validated spec, for orchestrator introspection.
    pub fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    /// Bound input channels.
    pub fn inputs(&self) -> &IndexMap<String, Channel> {
        self.spec.inputs()
    }

    /// Bound output channels.
    pub fn outputs(&self) -> &IndexMap<String, Channel> {
        self.spec.outputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::standard::EXAMPLES;
    use crate::component::schema::{ChannelDecl, ComponentSpecSchema};
    use indexmap::IndexMap;

    const SCHEMA: ComponentSpecSchema = ComponentSpecSchema {
        component_type: "test.components.PassThrough",
        parameters: &[],
        inputs: &[ChannelDecl {
            name: "input_data",
            artifact_type: EXAMPLES,
        }],
        outputs: &[ChannelDecl {
            name: "output_data",
            artifact_type: EXAMPLES,
        }],
    };

    fn spec() -> ComponentSpec {
        ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), Channel::of_type(EXAMPLES))]),
            IndexMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_explicit_key() {
        let component =
            Component::new(ComponentKey::new("hello"), ExecutorSpec::in_process("noop"), spec())
                .unwrap();
        assert_eq!(component.id().id(), "hello");
    }

    #[test]
    fn test_default_key_from_type_name() {
        let component =
            Component::with_default_key(ExecutorSpec::in_process("noop"), spec()).unwrap();
        assert_eq!(component.id().id(), "PassThrough");
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = Component::new(ComponentKey::new(""), ExecutorSpec::in_process("noop"), spec())
            .unwrap_err();
        assert!(matches!(err, ComponentError::EmptyComponentId));
    }

    #[test]
    fn test_introspection() {
        let component =
            Component::with_default_key(ExecutorSpec::in_process("noop"), spec()).unwrap();

        assert!(component.inputs().contains_key("input_data"));
        assert!(component.outputs().contains_key("output_data"));
        assert_eq!(
            component.executor_spec(),
            &ExecutorSpec::in_process("noop")
        );
    }
}
