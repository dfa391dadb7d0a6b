//! Aggregation engine
//!
//! Joins frameworks, components and descriptors into comparison matrices and
//! works out which frameworks lack a component kind. Everything here is pure
//! and synchronous; the same catalog always yields the same rows.

pub mod matrix;
pub mod missing;

pub use matrix::{
    build_feature_matrix, build_framework_feature_matrix, FeatureMatrix, FRAMEWORK_COLUMN,
};
pub use missing::{
    compute_missing_frameworks, missing_frameworks_block, missing_frameworks_sentence,
};

use crate::core::{Catalog, Descriptor, EnhancedComponent, Framework};
use crate::io::writers::markdown::Block;

/// Aggregation over one immutable catalog.
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
    components: Vec<EnhancedComponent<'a>>,
}

impl<'a> Aggregator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            components: catalog.enhanced_components(),
        }
    }

    pub fn feature_matrix(&self, descriptor: &Descriptor) -> FeatureMatrix {
        build_feature_matrix(&self.components, descriptor)
    }

    /// One matrix per descriptor, in registry order.
    pub fn feature_matrices(&self) -> Vec<(&'a Descriptor, FeatureMatrix)> {
        self.catalog
            .descriptors
            .iter()
            .map(|descriptor| (descriptor, self.feature_matrix(descriptor)))
            .collect()
    }

    pub fn framework_feature_matrix(&self, group: &Descriptor) -> FeatureMatrix {
        build_framework_feature_matrix(&self.catalog.frameworks, group)
    }

    pub fn missing_frameworks(&self, descriptor_id: &str) -> Vec<&'a Framework> {
        compute_missing_frameworks(descriptor_id, &self.catalog.frameworks, &self.components)
    }

    /// Call-out sentence naming the frameworks without `descriptor`.
    pub fn missing_frameworks_notice(&self, descriptor: &Descriptor, issue_url: &str) -> Option<String> {
        missing_frameworks_sentence(descriptor, &self.missing_for(descriptor), issue_url)
    }

    pub fn missing_frameworks_block(&self, descriptor: &Descriptor, issue_url: &str) -> Option<Block> {
        missing_frameworks_block(descriptor, &self.missing_for(descriptor), issue_url)
    }

    fn missing_for(&self, descriptor: &Descriptor) -> Vec<&'a Framework> {
        let missing = self.missing_frameworks(&descriptor.id);
        if !missing.is_empty() {
            log::debug!(
                "{} framework(s) lack {} {}",
                missing.len(),
                descriptor.article,
                descriptor.name
            );
        }
        missing
    }
}
