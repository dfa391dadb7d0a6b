use super::{RepoStats, StatsSource};
use crate::config::StatsConfig;
use crate::errors::{ReportError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct GithubLicense {
    name: Option<String>,
}

#[derive(Deserialize)]
struct GithubRepository {
    stargazers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    license: Option<GithubLicense>,
}

impl From<GithubRepository> for RepoStats {
    fn from(repo: GithubRepository) -> Self {
        Self {
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            license: repo.license.and_then(|license| license.name),
        }
    }
}

/// `https://github.com/owner/repo[.git][/...]` -> `(owner, repo)`.
///
/// Anything that is not a GitHub repository URL yields `None`.
pub fn parse_github_slug(url: &str) -> Option<(String, String)> {
    let rest = url
        .trim()
        .strip_prefix("https://github.com/")
        .or_else(|| url.trim().strip_prefix("http://github.com/"))
        .or_else(|| url.trim().strip_prefix("https://www.github.com/"))?;

    let mut parts = rest.split('/').filter(|part| !part.is_empty());
    let owner = parts.next()?;
    let repo = parts.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if repo.is_empty() {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}

/// GitHub REST API client for repository statistics.
pub struct GithubStatsClient {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GithubStatsClient {
    pub fn new(config: &StatsConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                ReportError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if token.is_none() {
            log::debug!(
                "{} is not set; GitHub requests are unauthenticated",
                config.token_env
            );
        }

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn fetch_repository(&self, repo_url: &str) -> Result<RepoStats> {
        let (owner, repo) = parse_github_slug(repo_url)
            .ok_or_else(|| ReportError::stats(repo_url, "not a GitHub repository URL"))?;
        let endpoint = format!("{}/repos/{owner}/{repo}", self.api_base);

        let mut request = self
            .client
            .get(&endpoint)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReportError::stats(repo_url, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ReportError::stats(
                repo_url,
                format!("GitHub API returned {status}: {body}"),
            ));
        }

        let repository: GithubRepository = response
            .json()
            .await
            .map_err(|e| ReportError::stats(repo_url, format!("unexpected response: {e}")))?;

        Ok(repository.into())
    }
}

#[async_trait]
impl StatsSource for GithubStatsClient {
    async fn fetch(&self, repo_url: &str) -> Option<RepoStats> {
        match self.fetch_repository(repo_url).await {
            Ok(stats) => {
                log::debug!("Fetched stats for {repo_url}: {} stars", stats.stars);
                Some(stats)
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_slug() {
        assert_eq!(
            parse_github_slug("https://github.com/acme/ui"),
            Some(("acme".to_string(), "ui".to_string()))
        );
        assert_eq!(
            parse_github_slug("https://github.com/acme/ui.git"),
            Some(("acme".to_string(), "ui".to_string()))
        );
        assert_eq!(
            parse_github_slug("https://github.com/acme/ui/tree/main/packages"),
            Some(("acme".to_string(), "ui".to_string()))
        );
    }

    #[test]
    fn test_parse_github_slug_rejects_other_hosts() {
        assert_eq!(parse_github_slug("https://gitlab.com/acme/ui"), None);
        assert_eq!(parse_github_slug("https://github.com/acme"), None);
        assert_eq!(parse_github_slug(""), None);
    }

    #[test]
    fn test_repository_payload_maps_to_stats() {
        let payload = r#"{
            "stargazers_count": 40210,
            "forks_count": 3100,
            "open_issues_count": 87,
            "license": { "key": "mit", "name": "MIT License" }
        }"#;
        let repo: GithubRepository = serde_json::from_str(payload).unwrap();
        let stats = RepoStats::from(repo);

        assert_eq!(stats.stars, 40210);
        assert_eq!(stats.forks, 3100);
        assert_eq!(stats.open_issues, 87);
        assert_eq!(stats.license.as_deref(), Some("MIT License"));
    }

    #[test]
    fn test_repository_payload_without_license() {
        let payload = r#"{"stargazers_count": 1, "forks_count": 0, "open_issues_count": 0, "license": null}"#;
        let repo: GithubRepository = serde_json::from_str(payload).unwrap();
        assert_eq!(RepoStats::from(repo).license, None);
    }

    #[tokio::test]
    async fn test_non_github_url_resolves_to_none_without_request() {
        let client = GithubStatsClient::new(&StatsConfig::default()).unwrap();
        assert!(client.fetch("https://example.com/acme/ui").await.is_none());
    }
}
