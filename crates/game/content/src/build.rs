//! Character build definition.

use game_core::SkillId;

use crate::error::ContentError;
use crate::gates::LevelGateTable;
use crate::plans::{SkillPointPlan, StatPointPlan};
use crate::technique::CombatProfile;

/// Bind `skill` once the character reaches `from_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindRule {
    pub from_level: u32,
    pub skill: SkillId,
}

/// Respec once the character is `min_level` or higher and still has more than
/// `max_points` in `skill`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillResetRule {
    pub min_level: u32,
    pub skill: SkillId,
    pub max_points: u8,
}

/// Everything static about one leveling character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterBuild {
    pub name: String,
    /// Skills that must be bound for the routines to work at all.
    pub required_bindings: Vec<SkillId>,
    /// Buffs recast after every town visit, when bound.
    pub buff_skills: Vec<SkillId>,
    pub bind_rules: Vec<BindRule>,
    /// Learned attacks in preference order; the first learned one is bound.
    pub attack_priority: Vec<SkillId>,
    /// Candidates for the main (left click) skill; falls back to the basic
    /// attack when none is learned.
    pub main_skills: Vec<SkillId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reset_rule: Option<SkillResetRule>,
    pub stat_plan: StatPointPlan,
    pub skill_plan: SkillPointPlan,
    pub combat: CombatProfile,
    pub level_gates: LevelGateTable,
}

impl CharacterBuild {
    pub fn validate(&self) -> Result<(), ContentError> {
        self.combat.validate()
    }
}
