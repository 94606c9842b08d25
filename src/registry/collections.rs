//! Container types for the genome → asset → record hierarchy.
//!
//! A registry document nests three insertion-ordered mapping levels:
//! [`GenomeCollection`] maps assembly names to an [`AssetCollection`], which
//! maps asset names to an [`AssetRecord`] of free-form metadata. Registration
//! order is preserved at every level and is part of the listing contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known record key that holds an asset's path or URL.
pub const CFG_ASSET_PATH_KEY: &str = "path";

/// Metadata stored for a single asset.
///
/// The model imposes no fixed schema beyond "a mapping"; by convention a
/// record carries at least a [`CFG_ASSET_PATH_KEY`] entry pointing at the
/// asset's file or URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRecord(IndexMap<String, String>);

impl AssetRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a metadata value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The path/URL this record points at, if one has been registered.
    pub fn path(&self) -> Option<&str> {
        self.get(CFG_ASSET_PATH_KEY)
    }

    /// Insert or overwrite a single metadata entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge `data` into this record, overwriting on key collision and
    /// leaving unrelated keys untouched.
    pub fn merge(&mut self, data: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in data {
            self.0.insert(key, value);
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for AssetRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The assets registered for one genome assembly, keyed by asset name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetCollection(IndexMap<String, AssetRecord>);

impl AssetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, asset_name: &str) -> Option<&AssetRecord> {
        self.0.get(asset_name)
    }

    pub fn contains(&self, asset_name: &str) -> bool {
        self.0.contains_key(asset_name)
    }

    /// Record for `asset_name`, created empty if absent.
    pub fn ensure(&mut self, asset_name: &str) -> &mut AssetRecord {
        self.0.entry(asset_name.to_string()).or_default()
    }

    /// Asset names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetRecord)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All registered genome assemblies, keyed by assembly name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenomeCollection(IndexMap<String, AssetCollection>);

impl GenomeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, genome_name: &str) -> Option<&AssetCollection> {
        self.0.get(genome_name)
    }

    pub fn contains(&self, genome_name: &str) -> bool {
        self.0.contains_key(genome_name)
    }

    /// Asset collection for `genome_name`, created empty if absent.
    pub fn ensure(&mut self, genome_name: &str) -> &mut AssetCollection {
        self.0.entry(genome_name.to_string()).or_default()
    }

    /// Assembly names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetCollection)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
