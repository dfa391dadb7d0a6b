//! `generate`: load the catalog, fetch repository statistics, render the
//! report and hand it to the sink.

use crate::cli::setup::build_runtime;
use crate::config::{load_config, load_config_from, MatrixConfig};
use crate::data::load_catalog;
use crate::io::{deliver, FileDestination, OutputDestination, StdoutDestination};
use crate::report::ReportAssembler;
use crate::stats::{collect_stats, GithubStatsClient, StatsIndex, StatsSource};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub data: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_stats: bool,
}

pub fn handle_generate(options: GenerateConfig) -> Result<()> {
    let config = resolve_config(options.config.as_deref())?;
    let catalog = load_catalog(&options.data)
        .with_context(|| format!("Failed to load catalog {}", options.data.display()))?;

    let stats = if options.no_stats || !config.stats.enabled {
        log::info!("Repository statistics disabled");
        StatsIndex::new()
    } else {
        let source: Arc<dyn StatsSource> = Arc::new(GithubStatsClient::new(&config.stats)?);
        let runtime = build_runtime()?;
        runtime.block_on(collect_stats(source, &catalog.frameworks))
    };

    let report = ReportAssembler::new(&catalog, &stats, &config.report)
        .render(Utc::now())
        .context("Failed to render report")?;

    let output = options
        .output
        .unwrap_or_else(|| config.report.output.clone());
    let destination = destination_for(&output);
    if !deliver(destination.as_ref(), &report) {
        eprintln!("Warning: report was not written to {}", destination.description());
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<MatrixConfig> {
    match path {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

/// `-` selects stdout, anything else is a file path.
pub fn destination_for(output: &Path) -> Box<dyn OutputDestination> {
    if output == Path::new("-") {
        Box::new(StdoutDestination::new())
    } else {
        Box::new(FileDestination::new(output.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_for_dash_is_stdout() {
        assert_eq!(destination_for(Path::new("-")).description(), "stdout");
        assert_eq!(
            destination_for(Path::new("README.md")).description(),
            "file:README.md"
        );
    }
}
