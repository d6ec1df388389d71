//! Error types for component declaration and launcher dispatch.
//!
//! All validation here is fail-fast: errors surface at the point of
//! detection and nothing is retried or suppressed.

use snafu::prelude::*;
use tundra_common::ComponentKey;

use crate::component::schema::ParameterType;

// ============ Component Errors ============

/// Errors that can occur while declaring or instantiating components.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ComponentError {
    /// A channel must reference at least one artifact.
    #[snafu(display("Channel cannot be constructed from an empty artifact list"))]
    EmptyChannel,

    /// All artifacts in a channel must share one artifact type.
    #[snafu(display("Channel mixes artifact types: expected '{expected}', found '{found}'"))]
    MixedArtifactTypes {
        expected: &'static str,
        found: &'static str,
    },

    /// A supplied parameter is not declared in the component's schema.
    #[snafu(display("Parameter '{name}' is not declared by component type '{component_type}'"))]
    UndeclaredParameter {
        component_type: &'static str,
        name: String,
    },

    /// A supplied input channel is not declared in the component's schema.
    #[snafu(display("Input '{name}' is not declared by component type '{component_type}'"))]
    UndeclaredInput {
        component_type: &'static str,
        name: String,
    },

    /// A supplied output channel is not declared in the component's schema.
    #[snafu(display("Output '{name}' is not declared by component type '{component_type}'"))]
    UndeclaredOutput {
        component_type: &'static str,
        name: String,
    },

    /// A required parameter was not supplied.
    #[snafu(display("Component type '{component_type}' requires parameter '{name}'"))]
    MissingParameter {
        component_type: &'static str,
        name: &'static str,
    },

    /// A declared input channel was not supplied.
    #[snafu(display("Component type '{component_type}' requires input '{name}'"))]
    MissingInput {
        component_type: &'static str,
        name: &'static str,
    },

    /// A parameter value does not match its declared type.
    #[snafu(display("Parameter '{name}' must be of type {expected:?}"))]
    ParameterTypeMismatch {
        name: &'static str,
        expected: ParameterType,
    },

    /// An input channel's artifact type does not match the declaration.
    #[snafu(display("Input '{name}' expects artifact type '{expected}', got '{found}'"))]
    InputTypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An output channel's artifact type does not match the declaration.
    #[snafu(display("Output '{name}' expects artifact type '{expected}', got '{found}'"))]
    OutputTypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A component id must be non-empty.
    #[snafu(display("Component id cannot be empty"))]
    EmptyComponentId,

    /// Two components in one pipeline share an id.
    #[snafu(display("Pipeline contains duplicate component id '{id}'"))]
    DuplicateComponent { id: ComponentKey },
}

// ============ Runner Errors ============

/// Errors raised by runner construction and launcher dispatch.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RunnerError {
    /// The supported launcher list must be non-empty.
    #[snafu(display("Supported launcher list cannot be empty"))]
    EmptyLauncherList,

    /// Platform configs were keyed by an empty component id.
    #[snafu(display("Component id cannot be empty in platform configs"))]
    EmptyPlatformConfigKey,

    /// Two platform configs of the same concrete type were attached to one component.
    #[snafu(display("Component '{component}' has multiple platform configs of the same type"))]
    DuplicatePlatformConfig { component: ComponentKey },

    /// No launcher/config combination can launch the component's executor.
    #[snafu(display("No launcher can launch component '{component}'"))]
    NoCapableLauncher { component: ComponentKey },
}
