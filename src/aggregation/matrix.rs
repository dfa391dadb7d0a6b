//! Option matrices: one row per framework, one column per option.

use crate::core::{Descriptor, EnhancedComponent, Framework};
use crate::errors::Result;
use crate::io::writers::markdown::{table, Block};

/// Header label of the first matrix column.
pub const FRAMEWORK_COLUMN: &str = "Framework";

/// A rectangular comparison table, not yet rendered to markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureMatrix {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FeatureMatrix {
    pub fn to_block(&self) -> Result<Block> {
        table(&self.headers, &self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Matrix for one component descriptor.
///
/// Option columns are sorted by option name regardless of how the descriptor
/// declares them. Rows follow the order of `components`, keeping only those
/// joined to `descriptor`.
pub fn build_feature_matrix(
    components: &[EnhancedComponent<'_>],
    descriptor: &Descriptor,
) -> FeatureMatrix {
    let options = descriptor.options_by_name();

    let headers: Vec<String> = std::iter::once(FRAMEWORK_COLUMN.to_string())
        .chain(options.iter().map(|option| option.name.clone()))
        .collect();

    let rows: Vec<Vec<String>> = components
        .iter()
        .filter(|entry| entry.descriptor.id == descriptor.id)
        .map(|entry| {
            std::iter::once(entry.framework.name.clone())
                .chain(
                    options
                        .iter()
                        .map(|option| option.render_value(entry.component.options.get(&option.id))),
                )
                .collect()
        })
        .collect();

    FeatureMatrix { headers, rows }
}

/// Matrix of framework-level features for one feature group, columns in
/// declaration order.
pub fn build_framework_feature_matrix(
    frameworks: &[Framework],
    group: &Descriptor,
) -> FeatureMatrix {
    let headers: Vec<String> = std::iter::once(FRAMEWORK_COLUMN.to_string())
        .chain(group.options.iter().map(|option| option.name.clone()))
        .collect();

    let rows: Vec<Vec<String>> = frameworks
        .iter()
        .map(|framework| {
            std::iter::once(framework.name.clone())
                .chain(
                    group
                        .options
                        .iter()
                        .map(|option| option.render_value(framework.features.get(&option.id))),
                )
                .collect()
        })
        .collect();

    FeatureMatrix { headers, rows }
}
