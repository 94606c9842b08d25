use anyhow::bail;
use clap::Args;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_NAME;
use crate::registry::store::GenomeRegistry;

#[derive(Args)]
pub struct InitArgs {
    /// Where to create the document
    #[arg(default_value = DEFAULT_CONFIG_NAME)]
    pub path: PathBuf,

    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }
    GenomeRegistry::new().write_to_file(&args.path)?;
    println!("Initialized empty genome config: {}", args.path.display());
    Ok(())
}
