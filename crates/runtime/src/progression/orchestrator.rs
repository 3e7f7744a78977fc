//! Level-gated progression through act 1.
//!
//! Every gate re-reads the character level right before it is evaluated, so a
//! run that was interrupted simply starts over and skips what is already
//! outgrown. Step failures are recorded and the checklist moves on.
use game_content::presets::ANDARIEL_ATTACK_POSITION;
use game_content::{BossId, BossTable, CharacterBuild, CombatProfile, GateTask, LevelGate};
use game_core::{Area, Difficulty, ItemLocation, TownNpc, TravelMode};

use super::report::{ProgressionReport, RunStatus, StepStatus};
use crate::api::{ConsumeTarget, Result, RuntimeError, VendorRequest, World};
use crate::character::Character;
use crate::config::RuntimeConfig;
use crate::encounter::{EncounterHandler, EncounterOutcome};

const ANTIDOTE: &str = "AntidotePotion";
const ANTIDOTE_TAB: u8 = 4;
const ANTIDOTES_TO_DRINK: usize = 4;

/// Drives one character through the act 1 checklist.
pub struct Leveler {
    world: World,
    build: CharacterBuild,
    bosses: BossTable,
    combat: CombatProfile,
    config: RuntimeConfig,
    difficulty: Difficulty,
}

impl Leveler {
    pub fn new(
        world: World,
        build: CharacterBuild,
        bosses: BossTable,
        difficulty: Difficulty,
        config: RuntimeConfig,
    ) -> Self {
        let combat = config.combat_profile(&build.combat);
        Self {
            world,
            build,
            bosses,
            combat,
            config,
            difficulty,
        }
    }

    pub fn character(&self) -> Character<'_> {
        Character::new(&self.build)
    }

    /// Named boss-kill entry point. Fights wherever the agent currently is.
    pub async fn kill(&self, boss: BossId) -> Result<EncounterOutcome> {
        let profile = self.bosses.get(boss).ok_or(RuntimeError::UnknownBoss(boss))?;
        EncounterHandler::new(&self.world, &self.combat, self.difficulty, &self.config)
            .run(profile)
            .await
    }

    /// Runs every open gate, then the Andariel step.
    pub async fn run_act1(&self) -> ProgressionReport {
        let snapshot = self.world.snapshot().await;
        if snapshot.player.area != Area::RogueEncampment {
            tracing::info!(area = %snapshot.player.area, "not in the act 1 town, nothing to do");
            return ProgressionReport::not_in_town(snapshot.player.area);
        }
        self.character().check_key_bindings(&snapshot);

        let mut report = ProgressionReport::started();
        for gate in self.build.level_gates.gates() {
            let step = gate.task.to_string();
            let level = self.world.snapshot().await.level();
            if !gate.is_open(level) {
                tracing::debug!(%step, level, threshold = gate.below_level, "gate closed");
                report.record(step, StepStatus::Skipped { level });
                continue;
            }

            tracing::info!(%step, level, threshold = gate.below_level, "running gate");
            let status = self.run_gate(gate).await.unwrap_or_else(|error| {
                tracing::error!(%step, %error, "step failed");
                StepStatus::Failed {
                    reason: error.to_string(),
                }
            });
            report.record(step, status);
        }

        let step = format!("kill {}", BossId::Andariel);
        match self.andariel().await {
            Ok((status, handed_off)) => {
                report.record(step, status);
                if handed_off {
                    report.status = RunStatus::HandedOff;
                }
            }
            Err(error) => {
                tracing::error!(%step, %error, "step failed");
                report.record(
                    step,
                    StepStatus::Failed {
                        reason: error.to_string(),
                    },
                );
            }
        }
        report
    }

    async fn run_gate(&self, gate: &LevelGate) -> Result<StepStatus> {
        match &gate.task {
            GateTask::ClearZone {
                area,
                travel,
                filter,
            } => {
                self.world.actions.travel(*area, *travel).await?;
                self.world.actions.clear_area(filter).await?;
                Ok(StepStatus::Executed)
            }
            GateTask::Boss(boss) => {
                let profile = self.bosses.get(*boss).ok_or(RuntimeError::UnknownBoss(*boss))?;
                for leg in &profile.route {
                    self.world.actions.travel(leg.area, leg.travel).await?;
                }
                let outcome = self.kill(*boss).await?;
                self.world.town.return_to_town().await?;
                Ok(match outcome {
                    EncounterOutcome::NotFound => StepStatus::NotFound,
                    EncounterOutcome::Defeated | EncounterOutcome::Survived => {
                        StepStatus::Executed
                    }
                })
            }
        }
    }

    /// Catacombs descent, antidote resupply, the Andariel fight and the
    /// hand-off to Warriv. Returns the step status and whether the hand-off
    /// happened.
    async fn andariel(&self) -> Result<(StepStatus, bool)> {
        let actions = &self.world.actions;
        let town = &self.world.town;

        actions
            .travel(Area::CatacombsLevel2, TravelMode::Waypoint)
            .await?;
        actions.travel(Area::CatacombsLevel3, TravelMode::Walk).await?;
        actions.travel(Area::CatacombsLevel4, TravelMode::Walk).await?;

        town.return_to_town().await?;
        town.refill().await?;

        let merc_alive = self.world.snapshot().await.player.merc_hp_percent() > 0;
        let quantity = if merc_alive { 8 } else { 4 };
        town.buy_at_vendor(
            TownNpc::Akara,
            VendorRequest::new(ANTIDOTE, quantity, ANTIDOTE_TAB),
        )
        .await?;

        let snapshot = self.world.snapshot().await;
        let antidotes = snapshot
            .inventory
            .by_location(ItemLocation::Inventory)
            .filter(|item| item.name == ANTIDOTE);
        for (index, item) in antidotes.enumerate() {
            let target = if index < ANTIDOTES_TO_DRINK {
                ConsumeTarget::Player
            } else {
                ConsumeTarget::Mercenary
            };
            town.consume_item(item, target).await?;
        }

        town.use_portal().await?;
        let buffs = self.character().buff_skills(&self.world.snapshot().await);
        town.buff(&buffs).await?;
        actions.move_to(ANDARIEL_ATTACK_POSITION).await?;

        let outcome = self.kill(BossId::Andariel).await?;
        town.return_to_town().await?;

        match outcome {
            EncounterOutcome::Defeated => {
                town.interact_npc(TownNpc::Warriv).await?;
                tracing::info!("act 1 complete, handing off to act 2");
                Ok((StepStatus::Executed, true))
            }
            EncounterOutcome::Survived => Ok((StepStatus::Executed, false)),
            EncounterOutcome::NotFound => Ok((StepStatus::NotFound, false)),
        }
    }
}
