//! Core data model: frameworks, their components and the descriptors that
//! define what is compared.

pub mod catalog;
pub mod options;

pub use catalog::{Catalog, EnhancedComponent};
pub use options::{OptionDescriptor, OptionKind, OptionValue, RenderFn, NO_VALUE};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Human-readable description of a descriptor.
///
/// Plain text is wrapped as a paragraph; rich descriptions are authored
/// markdown and pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Plain(String),
    Rich { markdown: String },
}

impl Description {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::Rich { markdown } => markdown.trim().is_empty(),
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

/// Canonical cross-framework definition of a component kind, also used for
/// groups of framework-level features.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub id: String,
    pub name: String,
    /// Indefinite article used verbatim in prose ("a" / "an").
    pub article: String,
    pub description: Description,
    pub options: Vec<OptionDescriptor>,
}

impl Descriptor {
    pub fn option(&self, id: &str) -> Option<&OptionDescriptor> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Options ordered by display name. The sort is stable, so options with
    /// equal names keep declaration order.
    pub fn options_by_name(&self) -> Vec<&OptionDescriptor> {
        let mut options: Vec<_> = self.options.iter().collect();
        options.sort_by(|a, b| a.name.cmp(&b.name));
        options
    }

    /// `(name, criterion)` pairs in declaration order.
    pub fn criteria(&self) -> Vec<(&str, &str)> {
        self.options
            .iter()
            .map(|option| (option.name.as_str(), option.criterion.as_str()))
            .collect()
    }
}

/// A framework's implementation of a component kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// References [`Descriptor::id`].
    pub id: String,
    /// Framework-specific display name.
    #[serde(default)]
    pub name: String,
    /// Documentation URL.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub options: HashMap<String, OptionValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub repository: String,
    /// Values for the framework-level feature groups.
    #[serde(default)]
    pub features: HashMap<String, OptionValue>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Framework {
    /// Repository URL as used for stats lookups and links.
    pub fn repository_url(&self) -> &str {
        self.repository.trim()
    }

    pub fn homepage_url(&self) -> &str {
        self.homepage.trim()
    }
}
