//! In-memory game world.
//!
//! Implements every external interface against a small simulated act: areas
//! hold monster populations, casts deal fixed damage unless the target is
//! immune to the technique's element, clearing an area grants levels, and
//! every command is recorded for inspection. Used by the client's dry run and
//! by tests.
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use game_content::presets::ANDARIEL_ATTACK_POSITION;
use game_core::{
    Area, DistanceEnvelope, Inventory, Item, ItemLocation, KeyBinding, KeyBindings, Mercenary,
    Monster, MonsterFilter, MonsterType, Monsters, NpcId, ObjectName, Objects, PlayerUnit,
    Position, Resist, ResourceMeter, SkillId, Snapshot, TownNpc, TravelMode, UnitId,
};

use crate::api::{
    ActionPrimitives, ConsumeTarget, GameStateView, Operation, PathFinder, Result, RuntimeError,
    TownLogistics, VendorRequest,
};

/// A command received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    MoveTo(Position),
    Travel {
        area: Area,
        mode: TravelMode,
    },
    PrimaryAttack {
        target: UnitId,
        repetitions: u32,
        melee: bool,
        envelope: DistanceEnvelope,
    },
    SecondaryAttack {
        skill: SkillId,
        target: UnitId,
        repetitions: u32,
        envelope: DistanceEnvelope,
    },
    ClearArea {
        area: Area,
        filter: MonsterFilter,
    },
    InteractObject(ObjectName),
    ReturnToTown,
    Refill,
    BuyAtVendor {
        vendor: TownNpc,
        request: VendorRequest,
    },
    ConsumeItem {
        item: String,
        target: ConsumeTarget,
    },
    UsePortal,
    Buff(Vec<SkillId>),
    InteractNpc(TownNpc),
}

struct PendingSpawn {
    area: Area,
    remaining: u32,
    monster: Monster,
}

#[derive(Default)]
struct MockState {
    player: PlayerUnit,
    key_bindings: KeyBindings,
    inventory: Inventory,
    objects: Objects,
    areas: HashMap<Area, Vec<Monster>>,
    pending: Vec<PendingSpawn>,
    last_field: Option<Area>,
    failures: HashMap<Operation, String>,
    calls: Vec<Call>,
}

impl MockState {
    fn monsters_here(&mut self) -> &mut Vec<Monster> {
        self.areas.entry(self.player.area).or_default()
    }

    fn hit(&mut self, target: UnitId, element: Option<Resist>, damage: u32) {
        let Some(monster) = self
            .monsters_here()
            .iter_mut()
            .find(|m| m.unit_id == target && m.is_alive())
        else {
            return;
        };
        if element.is_some_and(|resist| monster.is_immune(resist)) {
            return;
        }
        monster.life = monster.life.saturating_sub(damage);
    }

    fn tick_spawns(&mut self) {
        let area = self.player.area;
        let mut arrived = Vec::new();
        self.pending.retain_mut(|spawn| {
            if spawn.area != area {
                return true;
            }
            if spawn.remaining > 0 {
                spawn.remaining -= 1;
                return true;
            }
            arrived.push(spawn.monster.clone());
            false
        });
        self.areas.entry(area).or_default().extend(arrived);
    }
}

/// Simulated game implementing [`GameStateView`], [`PathFinder`],
/// [`ActionPrimitives`] and [`TownLogistics`].
pub struct MockGame {
    state: Mutex<MockState>,
    damage_per_cast: u32,
    levels_per_clear: u32,
}

impl MockGame {
    pub fn new(player: PlayerUnit) -> Self {
        Self {
            state: Mutex::new(MockState {
                player,
                ..MockState::default()
            }),
            damage_per_cast: 10,
            levels_per_clear: 1,
        }
    }

    /// A fresh act 1 character in the Rogue Encampment with a living
    /// mercenary, a bound town portal tome and Fire Bolt, and monsters in every
    /// zone of the checklist.
    pub fn act1(level: u32) -> Self {
        let mut player = PlayerUnit::new(Area::RogueEncampment, level);
        player.skills.insert(SkillId::FireBolt, 1);
        player.mercenary = Some(Mercenary {
            life: ResourceMeter::new(100, 100),
        });
        let game = Self::new(player);
        game.bind(SkillId::TomeOfTownPortal);
        game.bind(SkillId::FireBolt);

        let zones = [
            Area::BloodMoor,
            Area::ColdPlains,
            Area::StonyField,
            Area::DarkWood,
            Area::BlackMarsh,
        ];
        let mut next_id = 1;
        for area in zones {
            for offset in 0..3 {
                game.add_monster_in(
                    area,
                    Monster::new(
                        UnitId(next_id),
                        NpcId::Zombie,
                        MonsterType::None,
                        Position::new(10 + offset, 10),
                    )
                    .with_life(30),
                );
                next_id += 1;
            }
        }
        game.add_monster_in(
            Area::TowerCellarLevel5,
            Monster::new(
                UnitId(100),
                NpcId::DarkStalker,
                MonsterType::SuperUnique,
                Position::new(40, 40),
            )
            .with_life(120),
        );
        game.add_monster_in(
            Area::CatacombsLevel4,
            Monster::new(
                UnitId(200),
                NpcId::Andariel,
                MonsterType::Unique,
                Position::new(ANDARIEL_ATTACK_POSITION.x + 20, ANDARIEL_ATTACK_POSITION.y),
            )
            .with_life(300),
        );
        game
    }

    #[must_use]
    pub fn with_damage_per_cast(mut self, damage: u32) -> Self {
        self.damage_per_cast = damage;
        self
    }

    #[must_use]
    pub fn with_levels_per_clear(mut self, levels: u32) -> Self {
        self.levels_per_clear = levels;
        self
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `call` and fails it when a failure is configured for
    /// `operation`.
    fn command(&self, operation: Operation, call: Call) -> Result<MutexGuard<'_, MockState>> {
        let mut state = self.state();
        state.calls.push(call);
        match state.failures.get(&operation) {
            Some(reason) => Err(RuntimeError::primitive(operation, reason.clone())),
            None => Ok(state),
        }
    }

    /// Adds a monster to the area the player is in.
    pub fn add_monster(&self, monster: Monster) {
        let mut state = self.state();
        state.monsters_here().push(monster);
    }

    pub fn add_monster_in(&self, area: Area, monster: Monster) {
        self.state().areas.entry(area).or_default().push(monster);
    }

    /// Makes `monster` appear in `area` once that many snapshots have been
    /// taken with the player there.
    pub fn spawn_after(&self, area: Area, snapshots: u32, monster: Monster) {
        self.state().pending.push(PendingSpawn {
            area,
            remaining: snapshots,
            monster,
        });
    }

    /// Removes every monster with this unit id, as if something else killed it.
    pub fn despawn(&self, unit: UnitId) {
        for monsters in self.state().areas.values_mut() {
            monsters.retain(|m| m.unit_id != unit);
        }
    }

    pub fn bind(&self, skill: SkillId) {
        let mut state = self.state();
        let key = KeyBinding::new(format!("F{}", state.key_bindings.skills().count() + 1));
        state.key_bindings.bind(skill, key);
    }

    /// Moves the player without recording a command.
    pub fn place_player(&self, area: Area) {
        let mut state = self.state();
        state.player.area = area;
        state.player.position = Position::ORIGIN;
    }

    pub fn dismiss_mercenary(&self) {
        self.state().player.mercenary = None;
    }

    pub fn fail_on(&self, operation: Operation, reason: impl Into<String>) {
        self.state().failures.insert(operation, reason.into());
    }

    pub fn player(&self) -> PlayerUnit {
        self.state().player.clone()
    }

    pub fn monsters_in(&self, area: Area) -> Vec<Monster> {
        self.state().areas.get(&area).cloned().unwrap_or_default()
    }

    pub fn inventory(&self) -> Inventory {
        self.state().inventory.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    fn town_of(area: Area) -> Area {
        match area.act() {
            2 => Area::LutGholein,
            3 => Area::KurastDocks,
            4 => Area::ThePandemoniumFortress,
            5 => Area::Harrogath,
            _ => Area::RogueEncampment,
        }
    }
}

#[async_trait]
impl GameStateView for MockGame {
    async fn snapshot(&self) -> Snapshot {
        let mut state = self.state();
        state.tick_spawns();
        let monsters = Monsters::new(state.monsters_here().clone());
        Snapshot {
            player: state.player.clone(),
            monsters,
            key_bindings: state.key_bindings.clone(),
            inventory: state.inventory.clone(),
            objects: state.objects.clone(),
        }
    }
}

impl PathFinder for MockGame {
    fn distance(&self, from: Position, to: Position) -> u32 {
        from.chebyshev_distance(to)
    }
}

#[async_trait]
impl ActionPrimitives for MockGame {
    async fn move_to(&self, position: Position) -> Result<()> {
        let mut state = self.command(Operation::MoveTo, Call::MoveTo(position))?;
        state.player.position = position;
        Ok(())
    }

    async fn travel(&self, area: Area, mode: TravelMode) -> Result<()> {
        let mut state = self.command(Operation::Travel, Call::Travel { area, mode })?;
        state.player.area = area;
        state.player.position = Position::ORIGIN;
        if !area.is_town() {
            state.last_field = Some(area);
        }
        Ok(())
    }

    async fn primary_attack(
        &self,
        target: UnitId,
        repetitions: u32,
        melee: bool,
        envelope: DistanceEnvelope,
    ) -> Result<()> {
        let call = Call::PrimaryAttack {
            target,
            repetitions,
            melee,
            envelope,
        };
        let mut state = self.command(Operation::PrimaryAttack, call)?;
        let damage = self.damage_per_cast.saturating_mul(repetitions);
        state.hit(target, SkillId::AttackSkill.element(), damage);
        Ok(())
    }

    async fn secondary_attack(
        &self,
        skill: SkillId,
        target: UnitId,
        repetitions: u32,
        envelope: DistanceEnvelope,
    ) -> Result<()> {
        let call = Call::SecondaryAttack {
            skill,
            target,
            repetitions,
            envelope,
        };
        let mut state = self.command(Operation::SecondaryAttack, call)?;
        let damage = self.damage_per_cast.saturating_mul(repetitions);
        state.hit(target, skill.element(), damage);
        Ok(())
    }

    async fn clear_area(&self, filter: &MonsterFilter) -> Result<()> {
        let area = self.state().player.area;
        let call = Call::ClearArea {
            area,
            filter: filter.clone(),
        };
        let mut state = self.command(Operation::ClearArea, call)?;
        if area.is_town() {
            return Err(RuntimeError::primitive(
                Operation::ClearArea,
                format!("{area} has no hostiles"),
            ));
        }
        for monster in state.monsters_here().iter_mut() {
            if monster.is_alive() && filter.matches(monster) {
                monster.life = 0;
            }
        }
        state.player.level += self.levels_per_clear;
        Ok(())
    }

    async fn interact_object(&self, object: ObjectName) -> Result<()> {
        let state = self.command(Operation::InteractObject, Call::InteractObject(object))?;
        if state.objects.find_one(object).is_none() {
            return Err(RuntimeError::primitive(
                Operation::InteractObject,
                format!("no {object} nearby"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TownLogistics for MockGame {
    async fn return_to_town(&self) -> Result<()> {
        let mut state = self.command(Operation::ReturnToTown, Call::ReturnToTown)?;
        state.player.area = Self::town_of(state.player.area);
        state.player.position = Position::ORIGIN;
        Ok(())
    }

    async fn refill(&self) -> Result<()> {
        self.command(Operation::Refill, Call::Refill)?;
        Ok(())
    }

    async fn buy_at_vendor(&self, vendor: TownNpc, request: VendorRequest) -> Result<()> {
        let call = Call::BuyAtVendor {
            vendor,
            request: request.clone(),
        };
        let mut state = self.command(Operation::BuyAtVendor, call)?;
        for _ in 0..request.quantity {
            state
                .inventory
                .0
                .push(Item::new(request.item.clone(), ItemLocation::Inventory));
        }
        Ok(())
    }

    async fn consume_item(&self, item: &Item, target: ConsumeTarget) -> Result<()> {
        let call = Call::ConsumeItem {
            item: item.name.clone(),
            target,
        };
        let mut state = self.command(Operation::ConsumeItem, call)?;
        let position = state
            .inventory
            .0
            .iter()
            .position(|held| held.name == item.name && held.location == item.location);
        match position {
            Some(index) => {
                state.inventory.0.remove(index);
                Ok(())
            }
            None => Err(RuntimeError::primitive(
                Operation::ConsumeItem,
                format!("{} not in inventory", item.name),
            )),
        }
    }

    async fn use_portal(&self) -> Result<()> {
        let mut state = self.command(Operation::UsePortal, Call::UsePortal)?;
        match state.last_field {
            Some(area) if state.player.area.is_town() => {
                state.player.area = area;
                Ok(())
            }
            _ => Err(RuntimeError::primitive(Operation::UsePortal, "no portal open")),
        }
    }

    async fn buff(&self, skills: &[SkillId]) -> Result<()> {
        self.command(Operation::Buff, Call::Buff(skills.to_vec()))?;
        Ok(())
    }

    async fn interact_npc(&self, npc: TownNpc) -> Result<()> {
        let state = self.command(Operation::InteractNpc, Call::InteractNpc(npc))?;
        if !state.player.area.is_town() {
            return Err(RuntimeError::primitive(
                Operation::InteractNpc,
                format!("{npc} is not here"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn travel_and_portal_round_trip() {
        let game = MockGame::act1(5);
        game.travel(Area::CatacombsLevel4, TravelMode::Walk)
            .await
            .unwrap();
        game.return_to_town().await.unwrap();
        assert_eq!(game.player().area, Area::RogueEncampment);

        game.use_portal().await.unwrap();
        assert_eq!(game.player().area, Area::CatacombsLevel4);
        let snapshot = game.snapshot().await;
        assert!(
            snapshot
                .monsters
                .find_one(NpcId::Andariel, MonsterType::Unique)
                .is_some()
        );
    }

    #[tokio::test]
    async fn clearing_grants_levels_and_kills_matches() {
        let game = MockGame::act1(1).with_levels_per_clear(2);
        game.travel(Area::BloodMoor, TravelMode::Walk).await.unwrap();
        game.clear_area(&MonsterFilter::Any).await.unwrap();

        assert_eq!(game.player().level, 3);
        assert!(game.monsters_in(Area::BloodMoor).iter().all(|m| !m.is_alive()));
    }

    #[tokio::test]
    async fn immune_monsters_take_no_damage() {
        let game = MockGame::new(PlayerUnit::new(Area::BloodMoor, 10));
        game.add_monster(
            Monster::new(UnitId(1), NpcId::Zombie, MonsterType::None, Position::ORIGIN)
                .with_life(50)
                .with_immunities(game_core::Immunities::FIRE),
        );
        let envelope = DistanceEnvelope::new(25, 30);
        game.secondary_attack(SkillId::FireBall, UnitId(1), 4, envelope)
            .await
            .unwrap();
        assert_eq!(game.monsters_in(Area::BloodMoor)[0].life, 50);

        game.secondary_attack(SkillId::Blizzard, UnitId(1), 1, envelope)
            .await
            .unwrap();
        assert_eq!(game.monsters_in(Area::BloodMoor)[0].life, 40);
    }

    #[tokio::test]
    async fn pending_spawn_waits_for_snapshots_in_area() {
        let game = MockGame::new(PlayerUnit::new(Area::ChaosSanctuary, 40));
        game.spawn_after(
            Area::ChaosSanctuary,
            2,
            Monster::new(UnitId(9), NpcId::Diablo, MonsterType::Unique, Position::ORIGIN),
        );
        assert!(game.snapshot().await.monsters.is_empty());
        assert!(game.snapshot().await.monsters.is_empty());
        assert_eq!(game.snapshot().await.monsters.len(), 1);
    }

    #[tokio::test]
    async fn configured_failures_are_recorded_and_returned() {
        let game = MockGame::act1(1);
        game.fail_on(Operation::Travel, "waypoint missing");
        let error = game
            .travel(Area::StonyField, TravelMode::Waypoint)
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "travel failed: waypoint missing");
        assert_eq!(game.player().area, Area::RogueEncampment);
        assert_eq!(game.calls().len(), 1);
    }
}
