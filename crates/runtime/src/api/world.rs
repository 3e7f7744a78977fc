//! Narrow interfaces to the live game.
//!
//! Everything the decision core knows about the world comes through
//! [`GameStateView`]; everything it does goes through [`ActionPrimitives`] and
//! [`TownLogistics`]. Implementations own the process memory reader, the
//! input injector and the pathfinder. Commands block until the game has
//! acted on them and report failures as [`RuntimeError::Primitive`].
//!
//! [`RuntimeError::Primitive`]: super::RuntimeError::Primitive
use std::sync::Arc;

use async_trait::async_trait;
use game_core::{
    Area, DistanceEnvelope, Item, MonsterFilter, ObjectName, Position, SkillId, Snapshot,
    TownNpc, TravelMode, UnitId,
};

use super::errors::Result;

/// Read-only access to the current game state.
#[async_trait]
pub trait GameStateView: Send + Sync {
    /// Fresh snapshot of monsters, player, bindings, inventory and objects.
    async fn snapshot(&self) -> Snapshot;
}

/// Distance oracle backed by the pathfinder.
///
/// Synchronous so that target selection stays a pure function of the
/// snapshot it is given.
pub trait PathFinder: Send + Sync {
    fn distance(&self, from: Position, to: Position) -> u32;
}

/// Straight-line distance; used when walkable paths are not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl PathFinder for StraightLine {
    fn distance(&self, from: Position, to: Position) -> u32 {
        from.chebyshev_distance(to)
    }
}

/// Movement, combat and interaction commands.
#[async_trait]
pub trait ActionPrimitives: Send + Sync {
    async fn move_to(&self, position: Position) -> Result<()>;

    async fn travel(&self, area: Area, mode: TravelMode) -> Result<()>;

    /// Free-cost attack; `melee` forces a weapon swing instead of the bound
    /// primary skill.
    async fn primary_attack(
        &self,
        target: UnitId,
        repetitions: u32,
        melee: bool,
        envelope: DistanceEnvelope,
    ) -> Result<()>;

    async fn secondary_attack(
        &self,
        skill: SkillId,
        target: UnitId,
        repetitions: u32,
        envelope: DistanceEnvelope,
    ) -> Result<()>;

    /// Sweeps the whole current area, killing every hostile that matches.
    async fn clear_area(&self, filter: &MonsterFilter) -> Result<()>;

    async fn interact_object(&self, object: ObjectName) -> Result<()>;
}

/// Who drinks a consumed potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeTarget {
    Player,
    Mercenary,
}

/// One line of a vendor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRequest {
    pub item: String,
    pub quantity: u32,
    /// Vendor tab the item is listed on.
    pub tab: u8,
}

impl VendorRequest {
    pub fn new(item: impl Into<String>, quantity: u32, tab: u8) -> Self {
        Self {
            item: item.into(),
            quantity,
            tab,
        }
    }
}

/// Town-side logistics.
#[async_trait]
pub trait TownLogistics: Send + Sync {
    async fn return_to_town(&self) -> Result<()>;

    /// Refill potions and scrolls at the nearest vendors.
    async fn refill(&self) -> Result<()>;

    async fn buy_at_vendor(&self, vendor: TownNpc, request: VendorRequest) -> Result<()>;

    async fn consume_item(&self, item: &Item, target: ConsumeTarget) -> Result<()>;

    /// Walk through the town portal back to the field.
    async fn use_portal(&self) -> Result<()>;

    async fn buff(&self, skills: &[SkillId]) -> Result<()>;

    async fn interact_npc(&self, npc: TownNpc) -> Result<()>;
}

/// The full set of collaborators, shared by every component of one run.
#[derive(Clone)]
pub struct World {
    pub state: Arc<dyn GameStateView>,
    pub paths: Arc<dyn PathFinder>,
    pub actions: Arc<dyn ActionPrimitives>,
    pub town: Arc<dyn TownLogistics>,
}

impl World {
    pub fn new(
        state: Arc<dyn GameStateView>,
        paths: Arc<dyn PathFinder>,
        actions: Arc<dyn ActionPrimitives>,
        town: Arc<dyn TownLogistics>,
    ) -> Self {
        Self {
            state,
            paths,
            actions,
            town,
        }
    }

    /// Uses one object for every interface.
    pub fn from_shared<G>(game: Arc<G>) -> Self
    where
        G: GameStateView + PathFinder + ActionPrimitives + TownLogistics + 'static,
    {
        Self {
            state: game.clone(),
            paths: game.clone(),
            actions: game.clone(),
            town: game,
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.state.snapshot().await
    }
}
