//! Validated component spec instances.

use indexmap::IndexMap;
use snafu::prelude::*;

use crate::channel::Channel;
use crate::component::schema::{ComponentSpecSchema, ParameterValue};
use crate::error::{
    ComponentError, InputTypeMismatchSnafu, MissingInputSnafu, MissingParameterSnafu,
    OutputTypeMismatchSnafu, ParameterTypeMismatchSnafu, UndeclaredInputSnafu,
    UndeclaredOutputSnafu, UndeclaredParameterSnafu,
};

/// A component type's schema bound to concrete values: the per-instance
/// counterpart of [`ComponentSpecSchema`].
///
/// Construction validates everything structurally; a `ComponentSpec` that
/// exists is well-formed. Field order follows declaration order.
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    schema: &'static ComponentSpecSchema,
    parameters: IndexMap<String, ParameterValue>,
    inputs: IndexMap<String, Channel>,
    outputs: IndexMap<String, Channel>,
}

impl ComponentSpec {
    /// Bind concrete values to a schema.
    ///
    /// Fails if a supplied name is undeclared, a required parameter or input
    /// is missing, or any value's type mismatches its declaration. Declared
    /// outputs that were not supplied are minted as fresh default channels
    /// of the declared artifact type.
    pub fn new(
        schema: &'static ComponentSpecSchema,
        parameters: IndexMap<String, ParameterValue>,
        inputs: IndexMap<String, Channel>,
        outputs: IndexMap<String, Channel>,
    ) -> Result<Self, ComponentError> {
        let component_type = schema.component_type;

        // Reject anything the schema does not declare.
        for name in parameters.keys() {
            ensure!(
                schema.parameter(name).is_some(),
                UndeclaredParameterSnafu {
                    component_type,
                    name: name.as_str(),
                }
            );
        }
        for name in inputs.keys() {
            ensure!(
                schema.input(name).is_some(),
                UndeclaredInputSnafu {
                    component_type,
                    name: name.as_str(),
                }
            );
        }
        for name in outputs.keys() {
            ensure!(
                schema.output(name).is_some(),
                UndeclaredOutputSnafu {
                    component_type,
                    name: name.as_str(),
                }
            );
        }

        // Check declared parameters: required presence and value types.
        let mut checked_parameters = IndexMap::new();
        for decl in schema.parameters {
            match parameters.get(decl.name) {
                Some(value) => {
                    ensure!(
                        value.matches(decl.ty),
                        ParameterTypeMismatchSnafu {
                            name: decl.name,
                            expected: decl.ty,
                        }
                    );
                    checked_parameters.insert(decl.name.to_string(), value.clone());
                }
                None => {
                    ensure!(
                        decl.optional,
                        MissingParameterSnafu {
                            component_type,
                            name: decl.name,
                        }
                    );
                }
            }
        }

        // Inputs are required and must carry the declared artifact type.
        let mut checked_inputs = IndexMap::new();
        for decl in schema.inputs {
            let channel = inputs.get(decl.name).context(MissingInputSnafu {
                component_type,
                name: decl.name,
            })?;
            ensure!(
                channel.artifact_type() == decl.artifact_type,
                InputTypeMismatchSnafu {
                    name: decl.name,
                    expected: decl.artifact_type.name(),
                    found: channel.artifact_type().name(),
                }
            );
            checked_inputs.insert(decl.name.to_string(), channel.clone());
        }

        // Outputs default to freshly minted channels when not supplied.
        let mut checked_outputs = IndexMap::new();
        for decl in schema.outputs {
            let channel = match outputs.get(decl.name) {
                Some(channel) => {
                    ensure!(
                        channel.artifact_type() == decl.artifact_type,
                        OutputTypeMismatchSnafu {
                            name: decl.name,
                            expected: decl.artifact_type.name(),
                            found: channel.artifact_type().name(),
                        }
                    );
                    channel.clone()
                }
                None => Channel::of_type(decl.artifact_type),
            };
            checked_outputs.insert(decl.name.to_string(), channel);
        }

        Ok(Self {
            schema,
            parameters: checked_parameters,
            inputs: checked_inputs,
            outputs: checked_outputs,
        })
    }

    /// The schema this spec was validated against.
    pub fn schema(&self) -> &'static ComponentSpecSchema {
        self.schema
    }

    /// Bound parameter values, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, ParameterValue> {
        &self.parameters
    }

    /// Bound input channels, in declaration order.
    pub fn inputs(&self) -> &IndexMap<String, Channel> {
        &self.inputs
    }

    /// Bound output channels, in declaration order.
    pub fn outputs(&self) -> &IndexMap<String, Channel> {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::standard::EXAMPLES;
    use crate::component::schema::{ChannelDecl, ParameterDecl, ParameterType};

    const SCHEMA: ComponentSpecSchema = ComponentSpecSchema {
        component_type: "test.components.PassThrough",
        parameters: &[ParameterDecl {
            name: "name",
            ty: ParameterType::String,
            optional: true,
        }],
        inputs: &[ChannelDecl {
            name: "input_data",
            artifact_type: EXAMPLES,
        }],
        outputs: &[ChannelDecl {
            name: "output_data",
            artifact_type: EXAMPLES,
        }],
    };

    fn examples_channel() -> Channel {
        Channel::of_type(EXAMPLES)
    }

    #[test]
    fn test_minimal_instantiation_defaults_outputs() {
        let spec = ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), examples_channel())]),
            IndexMap::new(),
        )
        .unwrap();

        let output = &spec.outputs()["output_data"];
        assert_eq!(output.artifact_type(), EXAMPLES);
        let splits: Vec<_> = output.artifacts().iter().map(|a| a.split()).collect();
        assert_eq!(splits, vec![Some("train"), Some("eval")]);
    }

    #[test]
    fn test_optional_parameter_may_be_omitted() {
        let spec = ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), examples_channel())]),
            IndexMap::new(),
        )
        .unwrap();

        assert!(spec.parameters().is_empty());
    }

    #[test]
    fn test_undeclared_parameter_rejected() {
        let err = ComponentSpec::new(
            &SCHEMA,
            IndexMap::from([("unknown".to_string(), ParameterValue::from("x"))]),
            IndexMap::from([("input_data".to_string(), examples_channel())]),
            IndexMap::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ComponentError::UndeclaredParameter { .. }));
    }

    #[test]
    fn test_missing_input_rejected() {
        let err = ComponentSpec::new(&SCHEMA, IndexMap::new(), IndexMap::new(), IndexMap::new())
            .unwrap_err();

        match err {
            ComponentError::MissingInput { name, .. } => assert_eq!(name, "input_data"),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parameter_type_mismatch_rejected() {
        let err = ComponentSpec::new(
            &SCHEMA,
            IndexMap::from([("name".to_string(), ParameterValue::Int(3))]),
            IndexMap::from([("input_data".to_string(), examples_channel())]),
            IndexMap::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ComponentError::ParameterTypeMismatch { .. }));
    }

    #[test]
    fn test_input_type_mismatch_rejected() {
        use crate::artifact::ArtifactType;
        const MODEL: ArtifactType = ArtifactType::new("Model");

        let err = ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), Channel::of_type(MODEL))]),
            IndexMap::new(),
        )
        .unwrap_err();

        match err {
            ComponentError::InputTypeMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, "Examples");
                assert_eq!(found, "Model");
            }
            other => panic!("expected InputTypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_supplied_output_is_kept() {
        let supplied = Channel::from_artifacts(vec![
            crate::artifact::Artifact::new(EXAMPLES).with_split("holdout"),
        ])
        .unwrap();

        let spec = ComponentSpec::new(
            &SCHEMA,
            IndexMap::new(),
            IndexMap::from([("input_data".to_string(), examples_channel())]),
            IndexMap::from([("output_data".to_string(), supplied.clone())]),
        )
        .unwrap();

        assert_eq!(spec.outputs()["output_data"], supplied);
    }
}
