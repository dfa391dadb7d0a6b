//! Pure builders for the individual report sections.

use crate::aggregation::Aggregator;
use crate::config::ReportSettings;
use crate::core::{Catalog, Description, Descriptor, Framework};
use crate::errors::Result;
use crate::io::writers::markdown::{
    criteria, format_stat, heading, link, paragraph, quote, raw, section, strip_license_suffix,
    table, Block, Node, NOT_AVAILABLE,
};
use crate::stats::{parse_github_slug, RepoStats, StatsIndex};
use chrono::{DateTime, Utc};

pub const STATS_HEADERS: [&str; 7] = [
    "Name",
    "Homepage",
    "Repository",
    "Stars",
    "Forks",
    "Open issues",
    "License",
];

pub fn header(settings: &ReportSettings) -> Result<Block> {
    Ok(section(vec![
        Node::from(heading(1, &settings.title)?),
        Node::from(paragraph(&settings.intro)),
        Node::from(paragraph(&format!(
            "Browse the live version at {}.",
            link(&settings.site_url, &settings.site_url)
        ))),
        Node::from(paragraph(&link(&settings.credit_text, &settings.credit_url))),
    ]))
}

pub fn description_block(description: &Description) -> Block {
    match description {
        Description::Plain(text) => paragraph(text.trim()),
        Description::Rich { markdown } => raw(markdown),
    }
}

fn criteria_block(descriptor: &Descriptor) -> Block {
    criteria(&descriptor.criteria())
}

/// `owner/repo` for GitHub URLs, the URL itself otherwise.
fn repository_label(url: &str) -> String {
    parse_github_slug(url)
        .map(|(owner, repo)| format!("{owner}/{repo}"))
        .unwrap_or_else(|| url.to_string())
}

fn optional_link(text: &str, href: &str) -> String {
    if href.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        link(text, href)
    }
}

/// One statistics row; every figure falls back to the placeholder when the
/// repository has no stats entry.
pub fn stats_row(framework: &Framework, stats: Option<&RepoStats>) -> Vec<String> {
    let license = stats
        .and_then(|s| s.license.as_deref())
        .map(|name| strip_license_suffix(name).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    vec![
        framework.name.clone(),
        optional_link(framework.homepage_url(), framework.homepage_url()),
        optional_link(
            &repository_label(framework.repository_url()),
            framework.repository_url(),
        ),
        format_stat(stats.map(|s| s.stars)),
        format_stat(stats.map(|s| s.forks)),
        format_stat(stats.map(|s| s.open_issues)),
        license,
    ]
}

pub fn stats_table(frameworks: &[Framework], stats: &StatsIndex) -> Result<Block> {
    let rows: Vec<Vec<String>> = frameworks
        .iter()
        .map(|framework| stats_row(framework, stats.get(framework.repository_url())))
        .collect();
    table(&STATS_HEADERS, &rows)
}

pub fn captured_note(captured_at: DateTime<Utc>) -> Block {
    quote(&format!(
        "Repository statistics captured {}.",
        captured_at.format("%B %-d, %Y at %H:%M UTC")
    ))
}

pub fn frameworks(
    catalog: &Catalog,
    aggregator: &Aggregator<'_>,
    stats: &StatsIndex,
    captured_at: DateTime<Utc>,
) -> Result<Block> {
    let mut nodes = vec![
        Node::from(heading(1, "Frameworks")?),
        Node::from(stats_table(&catalog.frameworks, stats)?),
        Node::from(captured_note(captured_at)),
    ];

    for group in &catalog.feature_groups {
        nodes.push(Node::from(heading(2, &group.name)?));
        nodes.push(Node::from(description_block(&group.description)));
        nodes.push(Node::from(criteria_block(group)));
        nodes.push(Node::from(
            aggregator.framework_feature_matrix(group).to_block()?,
        ));
    }

    Ok(section(nodes))
}

pub fn component(
    descriptor: &Descriptor,
    aggregator: &Aggregator<'_>,
    settings: &ReportSettings,
) -> Result<Block> {
    Ok(section(vec![
        Node::from(heading(2, &descriptor.name)?),
        Node::from(description_block(&descriptor.description)),
        Node::from(criteria_block(descriptor)),
        Node::from(aggregator.feature_matrix(descriptor).to_block()?),
        Node::from(aggregator.missing_frameworks_block(descriptor, &settings.issue_url)),
    ]))
}

pub fn components(
    catalog: &Catalog,
    aggregator: &Aggregator<'_>,
    settings: &ReportSettings,
) -> Result<Block> {
    let mut nodes = vec![heading(1, "Components")?];
    for descriptor in &catalog.descriptors {
        nodes.push(component(descriptor, aggregator, settings)?);
    }
    Ok(section(nodes))
}

pub fn footer(settings: &ReportSettings) -> Result<Block> {
    Ok(section(vec![
        heading(1, "How to make a change")?,
        paragraph(&format!(
            "This document is generated. Edit the framework data and regenerate it \
             instead of changing this file by hand. See the {} for details.",
            link("contributing guide", &settings.contributing_url)
        )),
    ]))
}
