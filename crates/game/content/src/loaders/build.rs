//! Character build loader.

use std::path::Path;

use crate::build::CharacterBuild;
use crate::loaders::{LoadResult, read_file};

/// Loader for [`CharacterBuild`] RON files.
pub struct BuildLoader;

impl BuildLoader {
    /// Load and validate a build. Gate thresholds are checked while
    /// deserializing, technique cast counts afterwards.
    pub fn load(path: &Path) -> LoadResult<CharacterBuild> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid build {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CharacterBuild> {
        let build: CharacterBuild = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build RON: {}", e))?;
        build.validate()?;
        Ok(build)
    }
}
