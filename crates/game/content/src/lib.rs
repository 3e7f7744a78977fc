//! Data-driven character builds, progression gates and boss tables.
//!
//! This crate houses the static reference data the leveling agent consumes:
//! - Technique chains and combat thresholds per build
//! - Level gate tables for zone progression
//! - Skill and stat point plans keyed by level bracket
//! - The boss table (precast/engagement envelopes, spawn waits, targeting)
//! - Character/game configuration
//!
//! Every table has a built-in preset in [`presets`] and, with the `loaders`
//! feature, can be read from RON/TOML files. Content is read-only at runtime.

pub mod bosses;
pub mod build;
pub mod config;
pub mod error;
pub mod gates;
pub mod plans;
pub mod presets;
pub mod technique;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bosses::{BossId, BossProfile, BossTable, BossTargeting, RouteLeg};
pub use build::{BindRule, CharacterBuild, SkillResetRule};
pub use config::CharacterConfig;
pub use error::ContentError;
pub use gates::{GateTask, LevelGate, LevelGateTable};
pub use plans::{LevelBracket, SkillPointPlan, StatPointPlan};
pub use technique::{CombatProfile, PrecastProfile, PrimaryTechnique, TechniqueDescriptor};

#[cfg(feature = "loaders")]
pub use loaders::{BossLoader, BuildLoader, ConfigLoader, ContentFactory};
