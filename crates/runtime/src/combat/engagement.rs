//! The bounded attack cycle.
//!
//! Each tick re-reads the world: select a target, check it is still worth
//! attacking, cast one technique, count it. A target that survives
//! `max_attack_loops` consecutive attacks is abandoned.
use game_content::CombatProfile;
use game_core::{DistanceEnvelope, Immunities, Monster, Resist, Snapshot, UnitId};

use super::skills::{SkillSelector, TechniqueChoice};
use super::targeting::TargetSelector;
use crate::api::World;

/// Loop-scoped attack counter.
///
/// The count belongs to the current target: whenever a different id comes
/// back from selection it starts again from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackCycleState {
    current: Option<UnitId>,
    consecutive: u32,
}

impl AttackCycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the target selected this tick. Returns `true` on a switch.
    pub fn observe(&mut self, target: UnitId) -> bool {
        if self.current == Some(target) {
            return false;
        }
        self.current = Some(target);
        self.consecutive = 0;
        true
    }

    pub fn record_attack(&mut self) {
        self.consecutive += 1;
    }

    pub fn is_exhausted(&self, ceiling: u32) -> bool {
        self.consecutive >= ceiling
    }

    pub fn current_target(&self) -> Option<UnitId> {
        self.current
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }
}

/// Why an engagement ended without hitting the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneReason {
    /// The selector found nothing to attack.
    NoCandidate,
    /// The selected unit is dead or no longer in the snapshot.
    TargetGone,
    /// The selected unit shrugs off every bound technique on the skip list.
    Immune,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementOutcome {
    Done(DoneReason),
    /// The attack-cycle ceiling was reached on one target.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementReport {
    pub outcome: EngagementOutcome,
    /// Attack ticks issued over the whole run, across targets.
    pub attacks: u32,
    pub last_target: Option<UnitId>,
}

/// Drives one [`TargetSelector`] to completion.
pub struct EngagementLoop<'a> {
    world: &'a World,
    profile: &'a CombatProfile,
    envelope: Option<DistanceEnvelope>,
    skip: Immunities,
}

impl<'a> EngagementLoop<'a> {
    pub fn new(world: &'a World, profile: &'a CombatProfile) -> Self {
        Self {
            world,
            profile,
            envelope: None,
            skip: Immunities::empty(),
        }
    }

    #[must_use]
    pub fn with_envelope(mut self, envelope: Option<DistanceEnvelope>) -> Self {
        self.envelope = envelope;
        self
    }

    /// Damage kinds that make a fully immune candidate not worth fighting.
    #[must_use]
    pub fn with_skip_list(mut self, skip: impl IntoIterator<Item = Resist>) -> Self {
        self.skip = skip.into_iter().collect();
        self
    }

    pub async fn run(&self, selector: &dyn TargetSelector) -> EngagementReport {
        let skills = SkillSelector::new(self.profile).with_envelope(self.envelope);
        let ceiling = self.profile.max_attack_loops;
        let mut state = AttackCycleState::new();
        let mut attacks = 0;

        let outcome = loop {
            let snapshot = self.world.snapshot().await;

            let Some(target) = selector.select(&snapshot, self.world.paths.as_ref()) else {
                break EngagementOutcome::Done(DoneReason::NoCandidate);
            };
            if state.observe(target) {
                tracing::debug!(%target, "engaging new target");
            }

            if let Err(reason) = self.precheck(&snapshot, target, &skills) {
                tracing::debug!(%target, ?reason, "target dropped");
                break EngagementOutcome::Done(reason);
            }

            if state.is_exhausted(ceiling) {
                tracing::warn!(%target, attacks = state.consecutive(), "attack ceiling reached");
                break EngagementOutcome::Exhausted;
            }

            self.attack(target, skills.choose(&snapshot)).await;
            state.record_attack();
            attacks += 1;
        };

        EngagementReport {
            outcome,
            attacks,
            last_target: state.current_target(),
        }
    }

    fn precheck(
        &self,
        snapshot: &Snapshot,
        target: UnitId,
        skills: &SkillSelector<'_>,
    ) -> Result<(), DoneReason> {
        let Some(monster) = snapshot.monsters.find_by_id(target).filter(|m| m.is_alive()) else {
            return Err(DoneReason::TargetGone);
        };
        if self.is_skipped(monster, &skills.available_elements(snapshot)) {
            return Err(DoneReason::Immune);
        }
        Ok(())
    }

    /// A candidate is skipped when every bound ranged technique deals a kind
    /// that is on the skip list and that the candidate is immune to.
    fn is_skipped(&self, monster: &Monster, elements: &[Resist]) -> bool {
        !self.skip.is_empty()
            && !elements.is_empty()
            && elements.iter().all(|element| {
                self.skip.contains(Immunities::from(*element)) && monster.is_immune(*element)
            })
    }

    async fn attack(&self, target: UnitId, choice: TechniqueChoice) {
        let actions = &self.world.actions;
        let result = match choice {
            TechniqueChoice::Primary {
                casts,
                melee,
                envelope,
            } => actions.primary_attack(target, casts, melee, envelope).await,
            TechniqueChoice::Secondary {
                skill,
                casts,
                envelope,
            } => actions.secondary_attack(skill, target, casts, envelope).await,
        };
        // A missed cast still counts toward the ceiling.
        if let Err(error) = result {
            tracing::warn!(%target, %error, "attack not delivered");
        }
    }
}
