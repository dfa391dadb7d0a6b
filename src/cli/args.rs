use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "framework-matrix")]
#[command(about = "Generate a UI framework comparison report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the comparison report from a catalog file
    Generate {
        /// Catalog of frameworks, components and options (YAML)
        #[arg(short, long, default_value = "data/catalog.yaml")]
        data: PathBuf,

        /// Output file, `-` for stdout (defaults to the configured output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .framework-matrix.toml)
        #[arg(short, long, env = "FRAMEWORK_MATRIX_CONFIG")]
        config: Option<PathBuf>,

        /// Skip repository statistics; every statistic renders as N/A
        #[arg(long = "no-stats", visible_alias = "offline")]
        no_stats: bool,
    },

    /// Initialize a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
