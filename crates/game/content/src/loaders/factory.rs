//! Content factory for loading builds and tables from a data directory.

use std::path::{Path, PathBuf};

use crate::bosses::BossTable;
use crate::build::CharacterBuild;
use crate::config::CharacterConfig;
use crate::loaders::{BossLoader, BuildLoader, ConfigLoader, LoadResult};

/// Loads all leveling content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── bosses.ron
/// └── builds/
///     └── sorceress_leveling_fire.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load character configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CharacterConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load a build from `builds/{name}.ron`.
    pub fn load_build(&self, name: &str) -> LoadResult<CharacterBuild> {
        let path = self.data_dir.join("builds").join(format!("{name}.ron"));
        BuildLoader::load(&path)
    }

    /// Load the boss table from `bosses.ron`.
    pub fn load_bosses(&self) -> LoadResult<BossTable> {
        BossLoader::load(&self.data_dir.join("bosses.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ron::ser::PrettyConfig;

    use super::*;
    use crate::presets;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_everything_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("builds")).unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "character_name = \"sorc\"\nbuild = \"fire\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("builds").join("fire.ron"),
            ron::ser::to_string_pretty(&presets::sorceress_leveling_fire(), PrettyConfig::default())
                .unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join("bosses.ron"),
            ron::ser::to_string_pretty(&presets::boss_table(), PrettyConfig::default()).unwrap(),
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        assert_eq!(config.character_name, "sorc");

        let build = factory.load_build(&config.build).unwrap();
        assert_eq!(build, presets::sorceress_leveling_fire());

        let bosses = factory.load_bosses().unwrap();
        assert_eq!(bosses, presets::boss_table());
    }

    #[test]
    fn missing_build_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let error = ContentFactory::new(dir.path())
            .load_build("nope")
            .unwrap_err();
        assert!(error.to_string().contains("nope.ron"), "{error}");
    }
}
