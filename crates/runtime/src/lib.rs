//! Decision core for the leveling agent.
//!
//! This crate turns a character build and a live view of the game into a
//! bounded sequence of commands. It never talks to the game directly: reads go
//! through [`GameStateView`], commands through [`ActionPrimitives`] and
//! [`TownLogistics`], all bundled in a [`World`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the external interfaces and the error type
//! - [`combat`] hosts target and technique selection and the engagement loop
//! - [`encounter`] layers bounded spawn waits and boss procedures on top
//! - [`progression`] sequences level-gated zone and boss steps
//! - [`character`] derives bindings and point allocation from the build
//! - [`mock`] provides an in-memory world for dry runs and tests
pub mod api;
pub mod character;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod mock;
pub mod progression;

pub use api::{
    ActionPrimitives, ConsumeTarget, GameStateView, Operation, PathFinder, Result, RuntimeError,
    StraightLine, TownLogistics, VendorRequest, World,
};
pub use character::{Character, SkillBar};
pub use combat::{
    AttackCycleState, DoneReason, EngagementLoop, EngagementOutcome, EngagementReport, NearestOf,
    SingleTarget, SkillSelector, TargetSelector, TechniqueChoice,
};
pub use config::RuntimeConfig;
pub use encounter::{EncounterHandler, EncounterOutcome, Presence, SpawnTracker, SpawnWait};
pub use mock::MockGame;
pub use progression::{Leveler, ProgressionReport, RunStatus, StepRecord, StepStatus};
