// Test utility module for framework-matrix integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use framework_matrix::core::options::{render_boolean, render_count};
use framework_matrix::{
    Catalog, Component, Description, Descriptor, Framework, OptionDescriptor, OptionValue,
    RepoStats,
};
use std::collections::HashMap;
use std::path::PathBuf;

pub const ISSUE_URL: &str = "https://github.com/framework-matrix/framework-matrix/issues/new";

/// Fixed capture time so rendered reports are comparable.
pub fn captured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap()
}

pub fn alert_descriptor() -> Descriptor {
    Descriptor {
        id: "alert".to_string(),
        name: "Alert".to_string(),
        article: "an".to_string(),
        description: Description::Plain("A prominent message.".to_string()),
        options: vec![
            OptionDescriptor::new("variants", "Variants", "Number of variants.", render_count),
            OptionDescriptor::new("dismissible", "Dismissible", "Can be closed.", render_boolean),
        ],
    }
}

pub fn component(id: &str, options: &[(&str, OptionValue)]) -> Component {
    Component {
        id: id.to_string(),
        name: id.to_string(),
        url: format!("https://docs.example/{id}"),
        options: options
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<HashMap<_, _>>(),
    }
}

pub fn framework(name: &str, components: Vec<Component>) -> Framework {
    let id = name.to_lowercase().replace(' ', "-");
    Framework {
        homepage: format!("https://{id}.dev"),
        repository: format!("https://github.com/{id}/{id}"),
        id,
        name: name.to_string(),
        features: HashMap::new(),
        components,
    }
}

/// One descriptor with two options, three frameworks, Gamma lacks an alert.
pub fn three_framework_catalog() -> Catalog {
    Catalog::new(
        vec![alert_descriptor()],
        vec![],
        vec![
            framework(
                "Acme",
                vec![component(
                    "alert",
                    &[
                        ("variants", OptionValue::Count(4)),
                        ("dismissible", OptionValue::Bool(true)),
                    ],
                )],
            ),
            framework("Beta", vec![component("alert", &[("dismissible", OptionValue::Bool(false))])]),
            framework("Gamma", vec![]),
        ],
    )
}

pub fn stats(stars: u64, license: Option<&str>) -> RepoStats {
    RepoStats {
        stars,
        forks: stars / 10,
        open_issues: 12,
        license: license.map(str::to_string),
    }
}

pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/catalog.yaml")
}

/// Markdown tables in `markdown`, each as its list of lines.
pub fn tables(markdown: &str) -> Vec<Vec<&str>> {
    let mut tables = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in markdown.lines() {
        if line.starts_with('|') {
            current.push(line);
        } else if !current.is_empty() {
            tables.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tables.push(current);
    }
    tables
}

/// Text between `## {name}` and the next heading of level 1 or 2.
pub fn component_section<'a>(markdown: &'a str, name: &str) -> &'a str {
    let marker = format!("## {name}\n");
    let start = markdown
        .find(&marker)
        .unwrap_or_else(|| panic!("no section for {name}"));
    let body = &markdown[start + marker.len()..];
    let end = body
        .find("\n# ")
        .into_iter()
        .chain(body.find("\n## "))
        .min()
        .unwrap_or(body.len());
    &body[..end]
}
