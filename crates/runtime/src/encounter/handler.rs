//! One encounter procedure for every boss in the table.
//!
//! The handler waits for the boss (bounded), softens it once, then runs
//! engagement rounds until it is gone or the round budget is spent. Multi
//! instance bosses are fought one by one from their tactical point.
use std::time::Duration;

use game_content::{BossProfile, BossTargeting, CombatProfile};
use game_core::{Difficulty, DistanceEnvelope, MonsterType, NpcId, Position, Snapshot, UnitId};

use super::wait::{Presence, SpawnTracker, SpawnWait};
use crate::api::{PathFinder, Result, World};
use crate::combat::{EngagementLoop, NearestOf, SingleTarget, TargetSelector, precast};
use crate::config::RuntimeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Defeated,
    /// Never showed up within the spawn wait.
    NotFound,
    /// Still alive after every engagement round.
    Survived,
}

pub struct EncounterHandler<'a> {
    world: &'a World,
    combat: &'a CombatProfile,
    difficulty: Difficulty,
    poll_interval: Duration,
    rounds: u32,
}

impl<'a> EncounterHandler<'a> {
    pub fn new(
        world: &'a World,
        combat: &'a CombatProfile,
        difficulty: Difficulty,
        config: &RuntimeConfig,
    ) -> Self {
        Self {
            world,
            combat,
            difficulty,
            poll_interval: config.spawn_poll_interval,
            rounds: config.engagement_rounds.max(1),
        }
    }

    pub async fn run(&self, boss: &BossProfile) -> Result<EncounterOutcome> {
        tracing::info!(boss = %boss.id, "starting encounter");
        let outcome = match &boss.targeting {
            BossTargeting::Single { npc, kind } => {
                self.fight(boss, &SingleTarget::new(*npc, *kind)).await
            }
            BossTargeting::Nearest { names } => {
                self.fight(boss, &NearestOf::new(names.iter().copied()))
                    .await
            }
            BossTargeting::Sequential {
                names,
                kind,
                tactical_position,
            } => {
                self.fight_in_sequence(boss, names, *kind, *tactical_position)
                    .await?
            }
        };

        match outcome {
            EncounterOutcome::Defeated => tracing::info!(boss = %boss.id, "boss defeated"),
            EncounterOutcome::NotFound => tracing::warn!(
                boss = %boss.id,
                waited = ?boss.spawn_wait(),
                "boss not found, skipping encounter"
            ),
            EncounterOutcome::Survived => {
                tracing::warn!(boss = %boss.id, rounds = self.rounds, "boss survived every round")
            }
        }
        Ok(outcome)
    }

    fn engagement(&self, boss: &BossProfile) -> EngagementLoop<'a> {
        EngagementLoop::new(self.world, self.combat)
            .with_envelope(boss.engagement)
            .with_skip_list(boss.skip_on_immunities.iter().copied())
    }

    async fn fight(&self, boss: &BossProfile, selector: &dyn TargetSelector) -> EncounterOutcome {
        let engagement = self.engagement(boss);
        let mut tracker = SpawnTracker::new();

        for round in 0..=self.rounds {
            let window = if round == 0 {
                SpawnWait::new(boss.spawn_wait(), self.poll_interval)
            } else {
                SpawnWait::immediate()
            };
            let presence = window
                .until_present(&mut tracker, move || self.probe(selector))
                .await;

            match presence {
                Presence::Present(_) if round == self.rounds => break,
                Presence::Present(target) => {
                    if round == 0
                        && let Some(envelope) = boss.precast
                    {
                        self.soften(target, envelope).await;
                    }
                    let report = engagement.run(selector).await;
                    tracing::debug!(boss = %boss.id, round, ?report, "engagement round finished");
                }
                Presence::Defeated => return EncounterOutcome::Defeated,
                Presence::NotFound => return EncounterOutcome::NotFound,
            }
        }
        EncounterOutcome::Survived
    }

    async fn fight_in_sequence(
        &self,
        boss: &BossProfile,
        names: &[NpcId],
        kind: MonsterType,
        tactical_position: Position,
    ) -> Result<EncounterOutcome> {
        let members = |snapshot: &Snapshot, paths: &dyn PathFinder| {
            NearestOf::new(names.iter().copied())
                .ranked(snapshot, paths)
                .into_iter()
                .filter(|monster| monster.kind == kind)
                .map(|monster| (monster.name, monster.unit_id))
                .collect::<Vec<_>>()
        };
        let nearest = |snapshot: &Snapshot, paths: &dyn PathFinder| {
            members(snapshot, paths).first().map(|(_, id)| *id)
        };
        let nearest: &dyn TargetSelector = &nearest;

        let mut tracker = SpawnTracker::new();
        let presence = SpawnWait::new(boss.spawn_wait(), self.poll_interval)
            .until_present(&mut tracker, move || self.probe(nearest))
            .await;
        if matches!(presence, Presence::NotFound) {
            return Ok(EncounterOutcome::NotFound);
        }

        let snapshot = self.world.snapshot().await;
        let order = members(&snapshot, self.world.paths.as_ref());
        let engagement = self.engagement(boss);

        for (name, unit) in order {
            tracing::info!(boss = %boss.id, %name, %unit, "engaging pack member");
            if let Some(envelope) = boss.precast {
                self.soften(unit, envelope).await;
            }
            self.world.actions.move_to(tactical_position).await?;
            let report = engagement.run(&SingleTarget::new(name, kind)).await;
            tracing::debug!(%name, ?report, "pack member engagement finished");
        }

        let snapshot = self.world.snapshot().await;
        if members(&snapshot, self.world.paths.as_ref()).is_empty() {
            Ok(EncounterOutcome::Defeated)
        } else {
            Ok(EncounterOutcome::Survived)
        }
    }

    async fn probe(&self, selector: &dyn TargetSelector) -> Option<UnitId> {
        let snapshot = self.world.snapshot().await;
        selector.select(&snapshot, self.world.paths.as_ref())
    }

    async fn soften(&self, target: UnitId, envelope: DistanceEnvelope) {
        precast(
            self.world,
            &self.combat.precast,
            self.difficulty,
            target,
            envelope,
        )
        .await;
    }
}
