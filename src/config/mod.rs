//! Configuration for report generation.
//!
//! Settings come from `.framework-matrix.toml`, found by walking up from the
//! working directory; every field has a default so an absent file is fine.
//! Command-line flags override file values.
//!
//! ```toml
//! [report]
//! title = "UI Framework Comparison"
//! issue_url = "https://github.com/acme/matrix/issues/new"
//! output = "README.md"
//!
//! [stats]
//! enabled = true
//! token_env = "GITHUB_TOKEN"
//! timeout_seconds = 20
//! ```

pub mod core;
pub mod loader;

pub use self::core::{MatrixConfig, ReportSettings, StatsConfig};
pub use loader::{
    default_config_toml, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
