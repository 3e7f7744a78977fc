//! Per-character game configuration.

use game_core::Difficulty;

/// Settings that vary per character rather than per build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterConfig {
    pub character_name: String,
    /// Build file name under `builds/`, without extension.
    pub build: String,
    pub difficulty: Difficulty,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            character_name: "leveler".to_string(),
            build: "sorceress_leveling_fire".to_string(),
            difficulty: Difficulty::Normal,
        }
    }
}
