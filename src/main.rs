use anyhow::Result;
use framework_matrix::cli::{self, Commands};
use framework_matrix::commands::{handle_generate, init_config, GenerateConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Generate {
            data,
            output,
            config,
            no_stats,
        } => handle_generate(GenerateConfig {
            data,
            output,
            config,
            no_stats,
        }),
        Commands::Init { force } => init_config(force),
    }
}
