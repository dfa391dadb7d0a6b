use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, read from `.framework-matrix.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Report prose, links and output location
    #[serde(default)]
    pub report: ReportSettings,

    /// Repository statistics lookup
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Static text and links rendered around the generated tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_intro")]
    pub intro: String,

    /// Canonical live site the report mirrors
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_credit_text")]
    pub credit_text: String,

    #[serde(default = "default_credit_url")]
    pub credit_url: String,

    /// Target of the "File an issue" link in missing-component call-outs
    #[serde(default = "default_issue_url")]
    pub issue_url: String,

    #[serde(default = "default_contributing_url")]
    pub contributing_url: String,

    /// Where the report is written (`-` for stdout)
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            intro: default_intro(),
            site_url: default_site_url(),
            credit_text: default_credit_text(),
            credit_url: default_credit_url(),
            issue_url: default_issue_url(),
            contributing_url: default_contributing_url(),
            output: default_output(),
        }
    }
}

fn default_title() -> String {
    "UI Framework Comparison".to_string()
}

fn default_intro() -> String {
    "A side-by-side comparison of UI frameworks: which components each one ships \
     and which options those components support."
        .to_string()
}

fn default_site_url() -> String {
    "https://framework-matrix.dev".to_string()
}

fn default_credit_text() -> String {
    "Component data inspired by the component.gallery".to_string()
}

fn default_credit_url() -> String {
    "https://component.gallery".to_string()
}

fn default_issue_url() -> String {
    "https://github.com/framework-matrix/framework-matrix/issues/new".to_string()
}

fn default_contributing_url() -> String {
    "https://github.com/framework-matrix/framework-matrix/blob/main/CONTRIBUTING.md".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("README.md")
}

/// Statistics lookup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Fetch repository statistics (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding an optional API token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: 20)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_base: default_api_base(),
            token_env: default_token_env(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_user_agent() -> String {
    format!("framework-matrix/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_seconds() -> u64 {
    20
}
