//! Genome configuration documents on disk.
//!
//! A registry is persisted as a YAML document whose top-level `genomes` key
//! holds the genome collection; any other top-level entries are preserved
//! untouched. This module reads and writes those documents and resolves
//! which document to use via a prioritized environment-variable search.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::registry::store::GenomeRegistry;

/// Well-known top-level document key holding the genome collection.
pub const CFG_GENOMES_KEY: &str = "genomes";

/// Environment variables searched, in priority order, for the location of
/// the genome configuration document.
pub const CFG_ENV_VARS: [&str; 2] = ["GENOME_REGISTRY", "REFGENIE"];

/// Default filename for a freshly initialized configuration document.
pub const DEFAULT_CONFIG_NAME: &str = "genome_config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read genome config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Genome config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Resolve the path of the genome configuration document to use.
///
/// Each variable in `conf_env_vars` (default [`CFG_ENV_VARS`]) is checked in
/// order; the first one that is set, non-empty, and names an existing file
/// wins. Otherwise the supplied `filename` is returned as given, or `None`
/// if the caller supplied none either.
pub fn select_genome_config(
    filename: Option<&Path>,
    conf_env_vars: Option<&[&str]>,
) -> Option<PathBuf> {
    let env_vars = conf_env_vars.unwrap_or(CFG_ENV_VARS.as_slice());
    for var in env_vars {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() && Path::new(&value).exists() {
                return Some(PathBuf::from(value));
            }
        }
    }
    filename.map(Path::to_path_buf)
}

impl GenomeRegistry {
    /// Parse a registry from a YAML document. An empty document yields an
    /// empty registry. No shape validation is performed beyond
    /// deserialization; unrecognized top-level entries are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is not a mapping of
    /// the expected shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the registry back to a YAML document, genome collection
    /// and preserved extras included.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a registry from a document on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it does not parse.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Write the registry document to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialization fails, or
    /// [`ConfigError::Read`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
