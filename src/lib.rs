// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod io;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Catalog, Component, Description, Descriptor, EnhancedComponent, Framework, OptionDescriptor,
    OptionKind, OptionValue, RenderFn, NO_VALUE,
};

pub use crate::aggregation::{
    build_feature_matrix, compute_missing_frameworks, missing_frameworks_block, Aggregator,
    FeatureMatrix,
};

pub use crate::config::{MatrixConfig, ReportSettings, StatsConfig};
pub use crate::data::{load_catalog, parse_catalog};
pub use crate::errors::{ReportError, Result};
pub use crate::io::destinations::{FileDestination, MemoryDestination, OutputDestination};
pub use crate::report::ReportAssembler;
pub use crate::stats::{collect_stats, RepoStats, StatsIndex, StatsSource};
