//! Logical pipelines: named collections of component instances.
//!
//! The pipeline is opaque to the runner contract. Graph scheduling,
//! metadata, and lineage belong to the orchestration engine consuming it.

use snafu::prelude::*;
use std::collections::HashSet;
use tundra_common::ComponentKey;

use crate::component::Component;
use crate::error::{ComponentError, DuplicateComponentSnafu};

/// A logical pipeline definition: an ordered collection of components.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    components: Vec<Component>,
}

impl Pipeline {
    /// Create a pipeline. Component ids must be unique.
    pub fn new(
        name: impl Into<String>,
        components: Vec<Component>,
    ) -> Result<Self, ComponentError> {
        let mut seen = HashSet::new();
        for component in &components {
            ensure!(
                seen.insert(component.id().clone()),
                DuplicateComponentSnafu {
                    id: component.id().clone(),
                }
            );
        }

        Ok(Self {
            name: name.into(),
            components,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Components in declaration order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up a component by id.
    pub fn get(&self, key: &ComponentKey) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == key)
    }
}
