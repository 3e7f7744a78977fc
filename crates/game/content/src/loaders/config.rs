//! Character configuration loader.

use std::path::Path;

use crate::config::CharacterConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for character configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`CharacterConfig`] from a TOML file. Missing keys fall back to
    /// their defaults.
    pub fn load(path: &Path) -> LoadResult<CharacterConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CharacterConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
