//! Technique descriptors and the per-build combat profile.

use game_core::{Difficulty, DistanceEnvelope, SkillId};

use crate::error::ContentError;

/// One entry of a ranged fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueDescriptor {
    pub skill: SkillId,
    pub envelope: DistanceEnvelope,
    /// Consecutive casts that make up one attack unit. Weaker techniques need
    /// more casts to match one strike of a stronger one.
    pub casts_per_attack: u32,
}

impl TechniqueDescriptor {
    pub const fn new(skill: SkillId, envelope: DistanceEnvelope, casts_per_attack: u32) -> Self {
        Self {
            skill,
            envelope,
            casts_per_attack,
        }
    }
}

/// The free-cost short-range attack every build can fall back to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimaryTechnique {
    pub envelope: DistanceEnvelope,
    pub casts: u32,
    pub melee: bool,
}

/// Softening pass cast before engaging bosses that have one configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecastProfile {
    pub skill: SkillId,
    /// Casts on Normal, where the skill is cheap relative to boss life.
    pub casts_normal: u32,
    /// Casts on Nightmare and Hell.
    pub casts_other: u32,
}

impl PrecastProfile {
    pub const fn casts_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Normal => self.casts_normal,
            Difficulty::Nightmare | Difficulty::Hell => self.casts_other,
        }
    }
}

/// Combat thresholds and techniques of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatProfile {
    /// Attack-cycle ceiling: consecutive attacks on one target before giving up.
    pub max_attack_loops: u32,
    /// Below this mana percentage early characters use the primary attack.
    pub low_mana_percent: u32,
    /// Characters at or above this level never take the low-mana shortcut.
    pub early_level: u32,
    pub primary: PrimaryTechnique,
    /// Ranged techniques, highest priority first.
    pub chain: Vec<TechniqueDescriptor>,
    pub precast: PrecastProfile,
}

impl CombatProfile {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.max_attack_loops == 0 {
            return Err(ContentError::ZeroAttackCeiling);
        }
        if let Some(bad) = self.chain.iter().find(|t| t.casts_per_attack == 0) {
            return Err(ContentError::ZeroCasts { skill: bad.skill });
        }
        if self.primary.casts == 0 {
            return Err(ContentError::ZeroCasts {
                skill: SkillId::AttackSkill,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn precast_casts_depend_on_difficulty() {
        let precast = presets::sorceress_leveling_fire().combat.precast;
        assert_eq!(precast.casts_for(Difficulty::Normal), 8);
        assert_eq!(precast.casts_for(Difficulty::Nightmare), 6);
        assert_eq!(precast.casts_for(Difficulty::Hell), 6);
    }

    #[test]
    fn zero_cast_techniques_are_rejected() {
        let mut combat = presets::sorceress_leveling_fire().combat;
        combat.chain[2].casts_per_attack = 0;
        assert_eq!(
            combat.validate(),
            Err(ContentError::ZeroCasts {
                skill: SkillId::FireBall
            })
        );
    }

    #[test]
    fn zero_attack_ceiling_is_rejected() {
        let mut combat = presets::sorceress_leveling_fire().combat;
        combat.max_attack_loops = 0;
        assert_eq!(combat.validate(), Err(ContentError::ZeroAttackCeiling));
    }
}
