//! Statistics fetched concurrently and rendered into the framework table.

mod common;

use async_trait::async_trait;
use common::{captured_at, stats, three_framework_catalog};
use framework_matrix::{collect_stats, RepoStats, ReportAssembler, ReportSettings, StatsSource};
use std::collections::HashMap;
use std::sync::Arc;

/// Canned answers keyed by repository URL; anything else is a failed lookup.
struct FixtureSource {
    answers: HashMap<String, RepoStats>,
}

#[async_trait]
impl StatsSource for FixtureSource {
    async fn fetch(&self, repo_url: &str) -> Option<RepoStats> {
        tokio::task::yield_now().await;
        self.answers.get(repo_url).cloned()
    }
}

#[tokio::test]
async fn test_partial_stats_render_with_placeholders() {
    let catalog = three_framework_catalog();
    let source = FixtureSource {
        answers: HashMap::from([
            (
                "https://github.com/acme/acme".to_string(),
                stats(1200, Some("Apache License")),
            ),
            (
                "https://github.com/gamma/gamma".to_string(),
                stats(7, None),
            ),
        ]),
    };

    let index = collect_stats(Arc::new(source), &catalog.frameworks).await;
    assert_eq!(index.len(), 2);
    assert!(index.get("https://github.com/beta/beta").is_none());

    let report = ReportAssembler::new(&catalog, &index, &ReportSettings::default())
        .render(captured_at())
        .unwrap();

    assert!(report.contains("| 1,200 | 120 | 12 | Apache |"));
    assert!(report.contains("[beta/beta](https://github.com/beta/beta) | N/A | N/A | N/A | N/A |"));
    assert!(report.contains("[gamma/gamma](https://github.com/gamma/gamma) | 7 | 0 | 12 | N/A |"));
}

#[tokio::test]
async fn test_padded_repository_url_keeps_fetched_stats() {
    let mut catalog = three_framework_catalog();
    catalog.frameworks.truncate(1);
    catalog.frameworks[0].repository = "https://github.com/acme/acme \n".to_string();
    catalog.frameworks[0].homepage = " https://acme.dev".to_string();
    let source = FixtureSource {
        answers: HashMap::from([(
            "https://github.com/acme/acme".to_string(),
            stats(12345, Some("MIT License")),
        )]),
    };

    let index = collect_stats(Arc::new(source), &catalog.frameworks).await;
    let report = ReportAssembler::new(&catalog, &index, &ReportSettings::default())
        .render(captured_at())
        .unwrap();

    assert!(report.contains(
        "| Acme | [https://acme.dev](https://acme.dev) | [acme/acme](https://github.com/acme/acme) | 12,345 | 1,234 | 12 | MIT |"
    ));
}
