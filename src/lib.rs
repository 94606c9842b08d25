//! # genome-registry
//!
//! A registry of reference genome assembly assets.
//!
//! Genomics pipelines juggle many per-assembly resources: FASTA files,
//! annotation GTFs, aligner indexes. `genome-registry` tracks where those
//! assets live in a single YAML configuration document and answers
//! "where is asset X for assembly Y", with existence validation, aggregate
//! listing views, and safe incremental updates. It only tracks and reports
//! registered locations; it never fetches, builds, or verifies asset
//! content.
//!
//! ## Example
//!
//! ```rust
//! use genome_registry::{ExistencePolicy, GenomeRegistry};
//! use indexmap::IndexMap;
//!
//! let mut rgc = GenomeRegistry::new();
//! rgc.update_genomes(
//!     Some("hg38"),
//!     Some("fasta"),
//!     Some(IndexMap::from([(
//!         "path".to_string(),
//!         "/genomes/hg38/hg38.fa".to_string(),
//!     )])),
//! )
//! .update_genomes(Some("mm10"), Some("fasta"), None);
//!
//! assert_eq!(rgc.genomes_str(), "hg38, mm10");
//! assert_eq!(rgc.list_genomes_by_asset("fasta"), vec!["hg38", "mm10"]);
//!
//! // Skip the existence check; this is an in-memory example.
//! let path = rgc
//!     .get_asset_checked("hg38", "fasta", ExistencePolicy::Skip, |_| false)
//!     .unwrap();
//! assert_eq!(path, "/genomes/hg38/hg38.fa");
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: The registry data model and its query/mutation operations
//! - [`config`]: Configuration documents on disk and path resolution
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Shared helpers (default existence check)

pub mod cli;
pub mod config;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{select_genome_config, ConfigError, CFG_ENV_VARS, CFG_GENOMES_KEY};
pub use registry::collections::{AssetCollection, AssetRecord, GenomeCollection, CFG_ASSET_PATH_KEY};
pub use registry::store::{ExistencePolicy, GenomeRegistry, RegistryError};
pub use utils::exists::{default_check_exist, is_url};
