//! Immutable registries for a single report run and the join between them.

use super::{Component, Descriptor, Framework};

/// All entity data needed to render a report, fully materialised.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Component descriptors in registry order.
    pub descriptors: Vec<Descriptor>,
    /// Framework-level feature groups in registry order.
    pub feature_groups: Vec<Descriptor>,
    pub frameworks: Vec<Framework>,
}

/// A component joined with the framework that ships it and its descriptor.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedComponent<'a> {
    pub framework: &'a Framework,
    pub component: &'a Component,
    pub descriptor: &'a Descriptor,
}

impl Catalog {
    pub fn new(
        descriptors: Vec<Descriptor>,
        feature_groups: Vec<Descriptor>,
        frameworks: Vec<Framework>,
    ) -> Self {
        Self {
            descriptors,
            feature_groups,
            frameworks,
        }
    }

    pub fn descriptor(&self, id: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Join every framework component with its descriptor, framework order
    /// first, then component order.
    ///
    /// Components referencing an unknown descriptor are left out of the join.
    pub fn enhanced_components(&self) -> Vec<EnhancedComponent<'_>> {
        self.frameworks
            .iter()
            .flat_map(|framework| {
                framework
                    .components
                    .iter()
                    .filter_map(move |component| self.enhance(framework, component))
            })
            .collect()
    }

    fn enhance<'a>(
        &'a self,
        framework: &'a Framework,
        component: &'a Component,
    ) -> Option<EnhancedComponent<'a>> {
        match self.descriptor(&component.id) {
            Some(descriptor) => Some(EnhancedComponent {
                framework,
                component,
                descriptor,
            }),
            None => {
                log::warn!(
                    "{} lists component '{}' which has no descriptor; skipping it",
                    framework.name,
                    component.id
                );
                None
            }
        }
    }
}
