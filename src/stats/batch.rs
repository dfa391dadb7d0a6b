//! Concurrent statistics batch: one task per repository, joined before the
//! report is rendered.

use super::{StatsIndex, StatsSource};
use crate::core::Framework;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Distinct, non-empty repository URLs in framework order.
pub fn repository_urls(frameworks: &[Framework]) -> Vec<String> {
    let mut seen = HashSet::new();
    frameworks
        .iter()
        .map(Framework::repository_url)
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(url.to_string()))
        .map(str::to_string)
        .collect()
}

/// Fetch statistics for every framework repository concurrently.
///
/// Each URL is fetched once. A lookup that yields nothing, or a task that
/// panics, only loses its own entry.
pub async fn collect_stats(source: Arc<dyn StatsSource>, frameworks: &[Framework]) -> StatsIndex {
    let urls = repository_urls(frameworks);
    log::info!("Fetching repository stats for {} repositories", urls.len());

    let mut tasks = JoinSet::new();
    for url in urls {
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let stats = source.fetch(&url).await;
            (url, stats)
        });
    }

    let mut index = StatsIndex::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((url, Some(stats))) => index.insert(url, stats),
            Ok((url, None)) => log::info!("No stats available for {url}"),
            Err(e) => log::warn!("Stats task failed: {e}"),
        }
    }

    log::info!("Collected stats for {} repositories", index.len());
    index
}
