//! Content loading and the progression run for one character.
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use game_content::{BossTable, CharacterBuild, CharacterConfig, ContentFactory, presets};
use runtime::{GameStateView, Leveler, MockGame, ProgressionReport, RuntimeConfig, World};

use crate::config::ClientConfig;

/// Content resolved for one character.
#[derive(Clone, Debug)]
pub struct Session {
    pub character: CharacterConfig,
    pub build: CharacterBuild,
    pub bosses: BossTable,
}

impl Session {
    /// Loads content from the configured data directory, or the built-in
    /// presets when none is set.
    pub fn load(config: &ClientConfig) -> Result<Self> {
        let Some(dir) = &config.data_dir else {
            return Self::presets(config.build.as_deref());
        };

        let factory = ContentFactory::new(dir);
        let mut character = factory
            .load_config()
            .with_context(|| format!("Failed to load character config from {}", dir.display()))?;
        if let Some(build) = &config.build {
            character.build.clone_from(build);
        }
        let build = factory.load_build(&character.build)?;
        let bosses = factory.load_bosses()?;

        tracing::info!(
            data_dir = %dir.display(),
            build = %build.name,
            bosses = bosses.iter().count(),
            "content loaded"
        );
        Ok(Self {
            character,
            build,
            bosses,
        })
    }

    fn presets(build: Option<&str>) -> Result<Self> {
        let character = CharacterConfig::default();
        let preset = presets::sorceress_leveling_fire();
        if let Some(name) = build
            && name != preset.name
        {
            bail!("No built-in build named {name}; set BOT_DATA_DIR to load it from disk");
        }
        tracing::info!(build = %preset.name, "using built-in content");
        Ok(Self {
            character,
            build: preset,
            bosses: presets::boss_table(),
        })
    }

    /// Runs act 1 against the in-memory world, starting at `start_level`.
    pub async fn dry_run(&self, start_level: u32, config: RuntimeConfig) -> ProgressionReport {
        let game = Arc::new(MockGame::act1(start_level));
        let leveler = Leveler::new(
            World::from_shared(game.clone()),
            self.build.clone(),
            self.bosses.clone(),
            self.character.difficulty,
            config,
        );

        let snapshot = game.snapshot().await;
        let plan = leveler.character();
        tracing::debug!(
            main = %plan.skills_to_bind(&snapshot).main,
            skill_points = plan.skill_points(&snapshot).len(),
            stats = ?plan.stat_points(&snapshot),
            reset = plan.should_reset_skills(&snapshot),
            "character plan"
        );
        leveler.run_act1().await
    }
}
