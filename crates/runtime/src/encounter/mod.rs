//! Boss encounters layered over the engagement loop.

pub mod handler;
pub mod wait;

pub use handler::{EncounterHandler, EncounterOutcome};
pub use wait::{Presence, SpawnTracker, SpawnWait};
