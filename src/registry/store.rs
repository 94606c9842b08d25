use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::registry::collections::GenomeCollection;
use crate::utils::exists::default_check_exist;

/// Suffixes probed when a registered path fails the existence check;
/// assets are often left packed next to their unpacked location.
const ARCHIVE_SUFFIXES: [&str; 2] = [".tar.gz", ".tar"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Your genomes do not include {0}")]
    MissingGenome(String),

    #[error("Genome {genome} exists, but asset {asset} is missing")]
    MissingAsset { genome: String, asset: String },

    #[error("Asset {asset} for genome {genome} has no 'path' entry")]
    MissingPath { genome: String, asset: String },

    #[error("Asset may not exist: {path}{}", .alternate.as_ref().map(|p| format!("; {p} does exist")).unwrap_or_default())]
    NonexistentAsset {
        /// The path as registered (never the suffixed variant).
        path: String,
        /// Archive variant that passed the existence check, if any.
        alternate: Option<String>,
    },
}

/// How [`GenomeRegistry::get_asset_checked`] treats a registered path that
/// fails the existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistencePolicy {
    /// Fail hard with [`RegistryError::NonexistentAsset`].
    #[default]
    Require,
    /// Emit a runtime warning and return the path anyway.
    Warn,
    /// Skip the existence check entirely.
    Skip,
}

/// A sort of oracle of available reference genome assembly assets.
///
/// The registry wraps a configuration document whose well-known `genomes`
/// key maps assembly names to their registered assets. Any other top-level
/// entries in the document are carried through untouched; the registry never
/// validates or rewrites them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomeRegistry {
    #[serde(default)]
    genomes: GenomeCollection,

    /// Top-level document entries other than the genome collection,
    /// preserved verbatim across load/store.
    #[serde(flatten)]
    extra: IndexMap<String, serde_yaml::Value>,
}

impl GenomeRegistry {
    /// Create an empty registry (no genomes, no extra document entries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the genome collection.
    pub fn genomes(&self) -> &GenomeCollection {
        &self.genomes
    }

    /// Get the path to an asset for a particular assembly, requiring that
    /// the path exists (locally or as a URL).
    ///
    /// Shorthand for [`Self::get_asset_checked`] with
    /// [`ExistencePolicy::Require`] and the default existence check.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingGenome`] if the assembly is unknown,
    /// [`RegistryError::MissingAsset`] if the assembly is known but the
    /// asset is not, [`RegistryError::MissingPath`] if the asset record
    /// carries no path, or [`RegistryError::NonexistentAsset`] if the path
    /// fails the existence check.
    pub fn get_asset(&self, genome_name: &str, asset_name: &str) -> Result<&str, RegistryError> {
        self.get_asset_checked(
            genome_name,
            asset_name,
            ExistencePolicy::default(),
            default_check_exist,
        )
    }

    /// Get the path to an asset, with an explicit existence policy and a
    /// caller-supplied existence check.
    ///
    /// When the registered path fails `check_exist`, the `.tar.gz` and
    /// `.tar` variants are probed in that order and the first hit is named
    /// in the diagnostic. The returned path is always the one as registered,
    /// never a suffixed variant. Under [`ExistencePolicy::Warn`] the
    /// diagnostic goes to the warning channel and the path is still
    /// returned; under [`ExistencePolicy::Skip`] no check runs at all.
    ///
    /// `check_exist` may itself perform blocking I/O; that cost is the
    /// caller's, not the registry's. The registry is never mutated.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_asset`], except that
    /// [`RegistryError::NonexistentAsset`] is only produced under
    /// [`ExistencePolicy::Require`].
    pub fn get_asset_checked<F>(
        &self,
        genome_name: &str,
        asset_name: &str,
        policy: ExistencePolicy,
        check_exist: F,
    ) -> Result<&str, RegistryError>
    where
        F: Fn(&str) -> bool,
    {
        let assets = self
            .genomes
            .get(genome_name)
            .ok_or_else(|| RegistryError::MissingGenome(genome_name.to_string()))?;
        let record = assets
            .get(asset_name)
            .ok_or_else(|| RegistryError::MissingAsset {
                genome: genome_name.to_string(),
                asset: asset_name.to_string(),
            })?;
        let path = record.path().ok_or_else(|| RegistryError::MissingPath {
            genome: genome_name.to_string(),
            asset: asset_name.to_string(),
        })?;

        if policy != ExistencePolicy::Skip && !check_exist(path) {
            let alternate = ARCHIVE_SUFFIXES
                .iter()
                .map(|suffix| format!("{path}{suffix}"))
                .find(|candidate| check_exist(candidate));
            let err = RegistryError::NonexistentAsset {
                path: path.to_string(),
                alternate,
            };
            if policy == ExistencePolicy::Require {
                return Err(err);
            }
            warn!("{err}");
        }
        Ok(path)
    }

    /// Assembly names known to this registry, in registration order.
    pub fn genomes_list(&self) -> Vec<String> {
        self.genomes.names().map(str::to_string).collect()
    }

    /// Assembly names as a single `", "`-joined string.
    pub fn genomes_str(&self) -> String {
        self.genomes_list().join(", ")
    }

    /// Fresh snapshot mapping each assembly name to its asset names, both
    /// levels in registration order.
    pub fn assets_dict(&self) -> IndexMap<String, Vec<String>> {
        self.genomes
            .iter()
            .map(|(genome, assets)| {
                (
                    genome.to_string(),
                    assets.names().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    /// Block of text representing the genome-to-asset mapping, one line per
    /// assembly, with the default offset and separators.
    pub fn assets_str(&self) -> String {
        self.assets_str_with("  ", "; ", ": ")
    }

    /// Like [`Self::assets_str`] but with explicit line offset, asset
    /// separator, and genome/assets delimiter.
    pub fn assets_str_with(
        &self,
        offset_text: &str,
        asset_sep: &str,
        genome_assets_delim: &str,
    ) -> String {
        self.genomes
            .iter()
            .map(|(genome, assets)| {
                let asset_names: Vec<&str> = assets.names().collect();
                format!(
                    "{offset_text}{genome}{genome_assets_delim}{}",
                    asset_names.join(asset_sep)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Asset names available for one assembly, in registration order.
    /// For the all-assemblies view use [`Self::assets_dict`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingGenome`] if the assembly is unknown.
    pub fn list_assets_by_genome(&self, genome_name: &str) -> Result<Vec<String>, RegistryError> {
        self.genomes
            .get(genome_name)
            .map(|assets| assets.names().map(str::to_string).collect())
            .ok_or_else(|| RegistryError::MissingGenome(genome_name.to_string()))
    }

    /// Assemblies for which a particular asset is registered, in assembly
    /// registration order. An asset registered nowhere yields an empty list,
    /// not an error. For the full inverted view use
    /// [`Self::genomes_by_asset`].
    pub fn list_genomes_by_asset(&self, asset_name: &str) -> Vec<String> {
        self.genomes
            .iter()
            .filter(|(_, assets)| assets.contains(asset_name))
            .map(|(genome, _)| genome.to_string())
            .collect()
    }

    /// Invert the registry: map each asset name to the assemblies that
    /// register it.
    ///
    /// Per-genome asset metadata may differ, so it is necessarily dropped
    /// here; only presence is tracked. Assemblies within each list follow
    /// registration order, and first sighting of an asset fixes its position
    /// in the result.
    pub fn genomes_by_asset(&self) -> IndexMap<String, Vec<String>> {
        let mut inverted: IndexMap<String, Vec<String>> = IndexMap::new();
        for (genome, assets) in self.genomes.iter() {
            for asset in assets.names() {
                inverted
                    .entry(asset.to_string())
                    .or_default()
                    .push(genome.to_string());
            }
        }
        inverted
    }

    /// Update the registry at any level, creating missing levels on the way
    /// down.
    ///
    /// A `None` or empty `genome` makes the whole call a no-op; likewise an
    /// absent `asset` stops after ensuring the genome exists. `data` is
    /// merged into the asset record, overwriting on key collision and
    /// leaving unrelated keys untouched. Returns `&mut self` so successive
    /// updates can be chained.
    pub fn update_genomes(
        &mut self,
        genome: Option<&str>,
        asset: Option<&str>,
        data: Option<IndexMap<String, String>>,
    ) -> &mut Self {
        let Some(genome) = genome.filter(|name| !name.is_empty()) else {
            return self;
        };
        let assets = self.genomes.ensure(genome);
        let Some(asset) = asset.filter(|name| !name.is_empty()) else {
            return self;
        };
        let record = assets.ensure(asset);
        if let Some(data) = data {
            record.merge(data);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_registry() -> GenomeRegistry {
        let mut rgc = GenomeRegistry::new();
        rgc.update_genomes(
            Some("hg38"),
            Some("fasta"),
            Some(IndexMap::from([(
                "path".to_string(),
                "/genomes/hg38/hg38.fa".to_string(),
            )])),
        )
        .update_genomes(
            Some("mm10"),
            Some("fasta"),
            Some(IndexMap::from([(
                "path".to_string(),
                "/genomes/mm10/mm10.fa".to_string(),
            )])),
        )
        .update_genomes(
            Some("mm10"),
            Some("gtf"),
            Some(IndexMap::from([(
                "path".to_string(),
                "/genomes/mm10/genes.gtf".to_string(),
            )])),
        );
        rgc
    }

    #[test]
    fn test_get_asset_missing_genome() {
        let rgc = demo_registry();
        let err = rgc.get_asset("hg19", "fasta").unwrap_err();
        assert_eq!(err, RegistryError::MissingGenome("hg19".to_string()));
        assert!(err.to_string().contains("hg19"));
    }

    #[test]
    fn test_get_asset_missing_asset() {
        let rgc = demo_registry();
        let err = rgc.get_asset("hg38", "bowtie2_index").unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingAsset {
                genome: "hg38".to_string(),
                asset: "bowtie2_index".to_string(),
            }
        );
    }

    #[test]
    fn test_get_asset_missing_path_entry() {
        let mut rgc = GenomeRegistry::new();
        rgc.update_genomes(Some("hg38"), Some("fasta"), None);
        let err = rgc.get_asset("hg38", "fasta").unwrap_err();
        assert!(matches!(err, RegistryError::MissingPath { .. }));
    }

    #[test]
    fn test_get_asset_skip_policy_ignores_existence() {
        let rgc = demo_registry();
        let path = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Skip, |_| false)
            .unwrap();
        assert_eq!(path, "/genomes/hg38/hg38.fa");
    }

    #[test]
    fn test_get_asset_require_policy_fails_with_path_in_message() {
        let rgc = demo_registry();
        let err = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Require, |_| false)
            .unwrap_err();
        assert!(err.to_string().contains("/genomes/hg38/hg38.fa"));
        assert!(!err.to_string().contains(".tar"));
    }

    #[test]
    fn test_get_asset_warn_policy_still_returns_path() {
        let rgc = demo_registry();
        let path = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Warn, |_| false)
            .unwrap();
        assert_eq!(path, "/genomes/hg38/hg38.fa");
    }

    #[test]
    fn test_get_asset_reports_tarball_variant_but_returns_original() {
        let rgc = demo_registry();
        let err = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Require, |p| {
                p.ends_with(".tar.gz")
            })
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/genomes/hg38/hg38.fa.tar.gz does exist"));

        // Warn policy on the same shape still yields the registered path.
        let path = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Warn, |p| {
                p.ends_with(".tar.gz")
            })
            .unwrap();
        assert_eq!(path, "/genomes/hg38/hg38.fa");
    }

    #[test]
    fn test_tar_gz_probed_before_tar() {
        let rgc = demo_registry();
        // Both variants "exist"; the .tar.gz one must win.
        let err = rgc
            .get_asset_checked("hg38", "fasta", ExistencePolicy::Require, |p| {
                p.ends_with(".tar.gz") || p.ends_with(".tar")
            })
            .unwrap_err();
        assert!(err.to_string().contains(".tar.gz does exist"));
    }

    #[test]
    fn test_genomes_list_and_str() {
        let rgc = demo_registry();
        assert_eq!(rgc.genomes_list(), vec!["hg38", "mm10"]);
        assert_eq!(rgc.genomes_str(), "hg38, mm10");
    }

    #[test]
    fn test_assets_dict_snapshot() {
        let rgc = demo_registry();
        let dict = rgc.assets_dict();
        assert_eq!(dict["hg38"], vec!["fasta"]);
        assert_eq!(dict["mm10"], vec!["fasta", "gtf"]);
        let keys: Vec<&String> = dict.keys().collect();
        assert_eq!(keys, vec!["hg38", "mm10"]);
    }

    #[test]
    fn test_assets_str_one_line_per_genome() {
        let rgc = demo_registry();
        assert_eq!(
            rgc.assets_str(),
            "  hg38: fasta\n  mm10: fasta; gtf"
        );
    }

    #[test]
    fn test_assets_str_with_custom_separators() {
        let rgc = demo_registry();
        assert_eq!(
            rgc.assets_str_with("", ",", " -> "),
            "hg38 -> fasta\nmm10 -> fasta,gtf"
        );
    }

    #[test]
    fn test_list_assets_by_genome() {
        let rgc = demo_registry();
        assert_eq!(
            rgc.list_assets_by_genome("mm10").unwrap(),
            vec!["fasta", "gtf"]
        );
        assert_eq!(
            rgc.list_assets_by_genome("rn6").unwrap_err(),
            RegistryError::MissingGenome("rn6".to_string())
        );
    }

    #[test]
    fn test_list_genomes_by_asset() {
        let rgc = demo_registry();
        assert_eq!(rgc.list_genomes_by_asset("fasta"), vec!["hg38", "mm10"]);
        assert_eq!(rgc.list_genomes_by_asset("gtf"), vec!["mm10"]);
        assert!(rgc.list_genomes_by_asset("salmon_index").is_empty());
    }

    #[test]
    fn test_genomes_by_asset_inversion() {
        let rgc = demo_registry();
        let inverted = rgc.genomes_by_asset();
        assert_eq!(inverted["fasta"], vec!["hg38", "mm10"]);
        assert_eq!(inverted["gtf"], vec!["mm10"]);
        // First-seen asset fixes top-level order.
        let keys: Vec<&String> = inverted.keys().collect();
        assert_eq!(keys, vec!["fasta", "gtf"]);
    }

    #[test]
    fn test_update_genomes_builds_levels_on_empty_registry() {
        let mut rgc = GenomeRegistry::new();
        rgc.update_genomes(
            Some("hg38"),
            Some("fasta"),
            Some(IndexMap::from([("path".to_string(), "/x".to_string())])),
        );
        assert_eq!(rgc.genomes_list(), vec!["hg38"]);
        assert_eq!(rgc.list_assets_by_genome("hg38").unwrap(), vec!["fasta"]);
        let record = rgc.genomes().get("hg38").unwrap().get("fasta").unwrap();
        assert_eq!(record.path(), Some("/x"));
    }

    #[test]
    fn test_update_genomes_merges_without_clobbering() {
        let mut rgc = GenomeRegistry::new();
        rgc.update_genomes(
            Some("hg38"),
            Some("fasta"),
            Some(IndexMap::from([("path".to_string(), "/x".to_string())])),
        )
        .update_genomes(
            Some("hg38"),
            Some("fasta"),
            Some(IndexMap::from([(
                "checksum".to_string(),
                "abc".to_string(),
            )])),
        );
        let record = rgc.genomes().get("hg38").unwrap().get("fasta").unwrap();
        assert_eq!(record.path(), Some("/x"));
        assert_eq!(record.get("checksum"), Some("abc"));
    }

    #[test]
    fn test_update_genomes_none_is_noop() {
        let mut rgc = demo_registry();
        let before = rgc.clone();
        rgc.update_genomes(None, Some("fasta"), None);
        rgc.update_genomes(Some(""), Some("fasta"), None);
        assert_eq!(rgc, before);
    }

    #[test]
    fn test_update_genomes_genome_only() {
        let mut rgc = GenomeRegistry::new();
        rgc.update_genomes(Some("rn6"), None, None);
        assert_eq!(rgc.genomes_list(), vec!["rn6"]);
        assert!(rgc.list_assets_by_genome("rn6").unwrap().is_empty());
    }
}
