use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod registry;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("genome_registry=debug,info")
    } else {
        EnvFilter::new("genome_registry=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        cli::Commands::Init(args) => {
            cli::init::run(args)?;
        }
        cli::Commands::List(args) => {
            let config = cli::resolve_config(cli.genome_config.as_deref())?;
            cli::list::run(args, cli.format, &config)?;
        }
        cli::Commands::Seek(args) => {
            let config = cli::resolve_config(cli.genome_config.as_deref())?;
            cli::seek::run(args, cli.format, &config)?;
        }
        cli::Commands::Add(args) => {
            let config = cli::resolve_config(cli.genome_config.as_deref())?;
            cli::add::run(args, &config)?;
        }
    }

    Ok(())
}
