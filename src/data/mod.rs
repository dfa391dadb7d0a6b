//! Catalog loading
//!
//! Frameworks, component descriptors and feature groups are authored in a
//! single YAML document:
//!
//! ```yaml
//! descriptors:
//!   - id: alert
//!     name: Alert
//!     article: an
//!     description: A prominent message.
//!     options:
//!       - id: dismissible
//!         name: Dismissible
//!         criterion: The user can close it.
//!         kind: boolean
//! features:
//!   - id: tooling
//!     name: Tooling
//!     options:
//!       - { id: typescript, name: TypeScript, criterion: Ships types., kind: boolean }
//! frameworks:
//!   - id: acme
//!     name: Acme UI
//!     homepage: https://acme.dev
//!     repository: https://github.com/acme/ui
//!     features: { typescript: true }
//!     components:
//!       - id: alert
//!         name: Banner
//!         url: https://acme.dev/banner
//!         options: { dismissible: true }
//! ```
//!
//! Each option's `kind` selects its render function. The document is not
//! validated beyond deserialization.

use crate::core::{Catalog, Description, Descriptor, Framework, OptionDescriptor, OptionKind};
use crate::errors::{ReportError, Result};
use crate::io::read_file;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    descriptors: Vec<DescriptorDefinition>,
    #[serde(default)]
    features: Vec<DescriptorDefinition>,
    #[serde(default)]
    frameworks: Vec<Framework>,
}

#[derive(Debug, Deserialize)]
struct DescriptorDefinition {
    id: String,
    name: String,
    #[serde(default = "default_article")]
    article: String,
    #[serde(default)]
    description: Description,
    #[serde(default)]
    options: Vec<OptionDefinition>,
}

#[derive(Debug, Deserialize)]
struct OptionDefinition {
    id: String,
    name: String,
    #[serde(default)]
    criterion: String,
    #[serde(default = "default_kind")]
    kind: OptionKind,
}

fn default_article() -> String {
    "a".to_string()
}

fn default_kind() -> OptionKind {
    OptionKind::Boolean
}

impl From<OptionDefinition> for OptionDescriptor {
    fn from(def: OptionDefinition) -> Self {
        OptionDescriptor::new(def.id, def.name, def.criterion, def.kind.renderer())
    }
}

impl From<DescriptorDefinition> for Descriptor {
    fn from(def: DescriptorDefinition) -> Self {
        Descriptor {
            id: def.id,
            name: def.name,
            article: def.article,
            description: def.description,
            options: def.options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse a catalog from YAML text.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let document: CatalogDocument = serde_yaml::from_str(contents)?;
    Ok(Catalog::new(
        document.descriptors.into_iter().map(Into::into).collect(),
        document.features.into_iter().map(Into::into).collect(),
        document.frameworks,
    ))
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = read_file(path)?;
    let catalog = parse_catalog(&contents).map_err(|e| match e {
        ReportError::Data { message, .. } => ReportError::data_with_path(message, path),
        other => other,
    })?;

    log::info!(
        "Loaded {} frameworks, {} component descriptors and {} feature groups from {}",
        catalog.frameworks.len(),
        catalog.descriptors.len(),
        catalog.feature_groups.len(),
        path.display()
    );
    Ok(catalog)
}
