use anyhow::bail;
use clap::Args;
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

use crate::registry::store::GenomeRegistry;

#[derive(Args)]
pub struct AddArgs {
    /// Reference genome assembly name (e.g. hg38)
    pub genome: String,

    /// Asset name (e.g. fasta); omit to register the assembly alone
    pub asset: Option<String>,

    /// Metadata entry as key=value, repeatable; e.g. --data path=/genomes/hg38.fa
    #[arg(long = "data", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub data: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE pair: {s}"))
}

pub fn run(args: &AddArgs, config: &Path) -> anyhow::Result<()> {
    if !args.data.is_empty() && args.asset.is_none() {
        bail!("--data requires an asset name");
    }

    let mut rgc = GenomeRegistry::load_from_file(config)?;
    let data: Option<IndexMap<String, String>> = if args.data.is_empty() {
        None
    } else {
        Some(args.data.iter().cloned().collect())
    };
    rgc.update_genomes(Some(&args.genome), args.asset.as_deref(), data);
    rgc.write_to_file(config)?;
    debug!("updated {}", config.display());

    match &args.asset {
        Some(asset) => println!("Registered {}/{}", args.genome, asset),
        None => println!("Registered {}", args.genome),
    }
    Ok(())
}
