use clap::Args;
use serde_json::json;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::registry::store::{ExistencePolicy, GenomeRegistry};
use crate::utils::exists::default_check_exist;

#[derive(Args)]
pub struct SeekArgs {
    /// Reference genome assembly name (e.g. hg38)
    pub genome: String,

    /// Asset name (e.g. fasta)
    pub asset: String,

    /// How to treat a registered path that does not exist
    #[arg(long, value_enum, default_value = "require")]
    pub exists: ExistsArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ExistsArg {
    /// Fail if the path does not exist
    Require,
    /// Warn but still print the path
    Warn,
    /// Print the path without checking
    Skip,
}

impl From<ExistsArg> for ExistencePolicy {
    fn from(arg: ExistsArg) -> Self {
        match arg {
            ExistsArg::Require => Self::Require,
            ExistsArg::Warn => Self::Warn,
            ExistsArg::Skip => Self::Skip,
        }
    }
}

pub fn run(args: &SeekArgs, format: OutputFormat, config: &Path) -> anyhow::Result<()> {
    let rgc = GenomeRegistry::load_from_file(config)?;
    let path = rgc.get_asset_checked(
        &args.genome,
        &args.asset,
        args.exists.into(),
        default_check_exist,
    )?;

    match format {
        OutputFormat::Text => println!("{path}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "genome": args.genome,
                "asset": args.asset,
                "path": path,
            }))?
        ),
    }
    Ok(())
}
