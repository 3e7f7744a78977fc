//! Game data types shared by the leveling agent crates.
//!
//! `game-core` models the read-only view of the live game the decision core
//! works from: monsters, the player unit, key bindings, inventory and world
//! objects, bundled per tick into a [`Snapshot`]. Nothing in this crate talks to
//! the game process; acquisition and input injection live behind the traits in
//! the runtime crate.
pub mod area;
pub mod geometry;
pub mod inventory;
pub mod monster;
pub mod npc;
pub mod object;
pub mod player;
pub mod skill;
pub mod snapshot;

pub use area::{Area, Difficulty, TravelMode};
pub use geometry::{DistanceEnvelope, Position, UnitId};
pub use inventory::{Inventory, Item, ItemLocation};
pub use monster::{Immunities, Monster, MonsterFilter, MonsterType, Monsters, Resist};
pub use npc::{NpcId, TownNpc};
pub use object::{Object, ObjectName, Objects};
pub use player::{Mercenary, PlayerUnit, ResourceMeter};
pub use skill::{KeyBinding, KeyBindings, SkillId, StatId};
pub use snapshot::Snapshot;
