//! Command-line interface for genome-registry.
//!
//! Available commands:
//!
//! - **init**: Create an empty genome configuration document
//! - **list**: List genomes, per-genome assets, or per-asset genomes
//! - **seek**: Print the registered path of an asset
//! - **add**: Register or update a genome, asset, or asset metadata
//!
//! ## Usage
//!
//! ```text
//! # Start a fresh registry
//! genome-registry init genome_config.yaml
//!
//! # Register an asset
//! genome-registry -c genome_config.yaml add hg38 fasta --data path=/genomes/hg38/hg38.fa
//!
//! # Where is it?
//! genome-registry -c genome_config.yaml seek hg38 fasta
//!
//! # Everything, as JSON
//! genome-registry -c genome_config.yaml list --format json
//! ```
//!
//! When `-c/--genome-config` is omitted, the document location is resolved
//! from the `GENOME_REGISTRY` and `REFGENIE` environment variables.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::select_genome_config;

pub mod add;
pub mod init;
pub mod list;
pub mod seek;

#[derive(Parser)]
#[command(name = "genome-registry")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Track where reference genome assembly assets live")]
#[command(
    long_about = "genome-registry maintains a registry of reference genome assembly assets.\n\nIt answers \"where is asset X for assembly Y\" against a YAML configuration document, and incrementally builds such a document up as assets are registered."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Genome configuration document; defaults to the path named by
    /// $GENOME_REGISTRY or $REFGENIE
    #[arg(short = 'c', long, global = true)]
    pub genome_config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty genome configuration document
    Init(init::InitArgs),

    /// List genomes and their assets
    List(list::ListArgs),

    /// Print the registered path of an asset
    Seek(seek::SeekArgs),

    /// Register or update a genome, asset, or asset metadata
    Add(add::AddArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve which configuration document a command should operate on.
pub fn resolve_config(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    match flag {
        Some(path) => Ok(path.to_path_buf()),
        None => select_genome_config(None, None).context(
            "no genome configuration found; pass --genome-config or set GENOME_REGISTRY/REFGENIE",
        ),
    }
}
