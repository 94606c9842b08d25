//! Genome asset registry: the configuration data model and its query and
//! mutation operations.
//!
//! A registry answers "where is asset X for assembly Y". It wraps a
//! hierarchical configuration document of three insertion-ordered levels
//! (genome → asset → metadata record) and offers validated lookup with a
//! configurable existence policy, aggregate listing and inversion views, and
//! idempotent create-if-absent updates.
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
//! );
//!
//! assert_eq!(rgc.genomes_list(), vec!["hg38"]);
//! let path = rgc
//!     .get_asset_checked("hg38", "fasta", ExistencePolicy::Skip, |_| false)
//!     .unwrap();
//! assert_eq!(path, "/genomes/hg38/hg38.fa");
//! ```

pub mod collections;
pub mod store;
