//! Repository statistics
//!
//! Statistics are optional decoration on the framework table. A lookup that
//! fails for any reason resolves to `None` and the report shows a placeholder
//! instead.

pub mod batch;
pub mod github;

pub use batch::collect_stats;
pub use github::{parse_github_slug, GithubStatsClient};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Popularity and health figures for one source repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub license: Option<String>,
}

/// Anything that can look up statistics for a repository URL.
///
/// Implementations must not fail: errors are logged and become `None`.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self, repo_url: &str) -> Option<RepoStats>;
}

/// Statistics keyed by repository URL.
#[derive(Debug, Clone, Default)]
pub struct StatsIndex {
    entries: HashMap<String, RepoStats>,
}

impl StatsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, repo_url: impl Into<String>, stats: RepoStats) {
        self.entries.insert(repo_url.into(), stats);
    }

    pub fn get(&self, repo_url: &str) -> Option<&RepoStats> {
        self.entries.get(repo_url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, RepoStats)> for StatsIndex {
    fn from_iter<I: IntoIterator<Item = (String, RepoStats)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
