//! Static, data-driven component schemas.
//!
//! A component type declares its parameters and input/output channels once,
//! in a const table. Instantiation validates supplied values structurally
//! against the table; there is no runtime type hierarchy.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactType;

/// Value type of an execution parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Int,
    Float,
    Bool,
}

/// A concrete parameter value supplied at instantiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParameterValue {
    /// Whether this value satisfies the declared parameter type.
    pub fn matches(&self, ty: ParameterType) -> bool {
        matches!(
            (self, ty),
            (ParameterValue::String(_), ParameterType::String)
                | (ParameterValue::Int(_), ParameterType::Int)
                | (ParameterValue::Float(_), ParameterType::Float)
                | (ParameterValue::Bool(_), ParameterType::Bool)
        )
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Declaration of a single execution parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDecl {
    pub name: &'static str,
    pub ty: ParameterType,
    /// Optional parameters may be omitted at instantiation.
    pub optional: bool,
}

/// Declaration of a single input or output channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDecl {
    pub name: &'static str,
    pub artifact_type: ArtifactType,
}

/// The class-level schema of a component type: its parameters and its typed
/// input/output channels.
///
/// Declared once per component type as a const:
///
/// ```
/// use tundra::artifact::standard::EXAMPLES;
/// use tundra::component::schema::{
///     ChannelDecl, ComponentSpecSchema, ParameterDecl, ParameterType,
/// };
///
/// const PASS_THROUGH: ComponentSpecSchema = ComponentSpecSchema {
///     component_type: "demo.components.PassThrough",
///     parameters: &[ParameterDecl {
///         name: "name",
///         ty: ParameterType::String,
///         optional: true,
///     }],
///     inputs: &[ChannelDecl { name: "input_data", artifact_type: EXAMPLES }],
///     outputs: &[ChannelDecl { name: "output_data", artifact_type: EXAMPLES }],
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpecSchema {
    /// Qualified name of the component type; also the source of default
    /// component ids.
    pub component_type: &'static str,
    pub parameters: &'static [ParameterDecl],
    pub inputs: &'static [ChannelDecl],
    pub outputs: &'static [ChannelDecl],
}

impl ComponentSpecSchema {
    pub(crate) fn parameter(&self, name: &str) -> Option<&ParameterDecl> {
        self.parameters.iter().find(|decl| decl.name == name)
    }

    pub(crate) fn input(&self, name: &str) -> Option<&ChannelDecl> {
        self.inputs.iter().find(|decl| decl.name == name)
    }

    pub(crate) fn output(&self, name: &str) -> Option<&ChannelDecl> {
        self.outputs.iter().find(|decl| decl.name == name)
    }
}
