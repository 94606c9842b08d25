use anyhow::bail;
use clap::Args;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::registry::store::GenomeRegistry;

#[derive(Args)]
pub struct ListArgs {
    /// Restrict to one assembly and list its assets
    #[arg(short, long)]
    pub genome: Option<String>,

    /// Invert: list the assemblies that register this asset
    #[arg(short, long)]
    pub asset: Option<String>,
}

pub fn run(args: &ListArgs, format: OutputFormat, config: &Path) -> anyhow::Result<()> {
    let rgc = GenomeRegistry::load_from_file(config)?;

    match (&args.genome, &args.asset) {
        (Some(_), Some(_)) => bail!("pass at most one of --genome and --asset"),
        (Some(genome), None) => {
            let assets = rgc.list_assets_by_genome(genome)?;
            match format {
                OutputFormat::Text => println!("{}", assets.join("; ")),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assets)?),
            }
        }
        (None, Some(asset)) => {
            let genomes = rgc.list_genomes_by_asset(asset);
            match format {
                OutputFormat::Text => println!("{}", genomes.join(", ")),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&genomes)?),
            }
        }
        (None, None) => match format {
            OutputFormat::Text => println!("{}", rgc.assets_str()),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&rgc.assets_dict())?);
            }
        },
    }
    Ok(())
}
