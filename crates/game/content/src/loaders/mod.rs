//! Content loaders for reading builds, boss tables and configuration from files.
//!
//! Builds and boss tables are RON, character configuration is TOML. Every
//! loaded table goes through the same validation as the in-code presets.

pub mod bosses;
pub mod build;
pub mod config;
pub mod factory;

pub use bosses::BossLoader;
pub use build::BuildLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
