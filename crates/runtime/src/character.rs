//! The per-character contract: bindings, buffs and point allocation derived
//! from the build and the live player state.
use std::collections::BTreeMap;

use game_content::CharacterBuild;
use game_core::{Difficulty, SkillId, Snapshot, StatId};

/// Main skill plus the skills that should sit on the skill bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub main: SkillId,
    pub bindings: Vec<SkillId>,
}

#[derive(Debug, Clone, Copy)]
pub struct Character<'a> {
    build: &'a CharacterBuild,
}

impl<'a> Character<'a> {
    pub fn new(build: &'a CharacterBuild) -> Self {
        Self { build }
    }

    pub fn build(&self) -> &'a CharacterBuild {
        self.build
    }

    /// Required skills that have no key binding.
    pub fn check_key_bindings(&self, snapshot: &Snapshot) -> Vec<SkillId> {
        let missing: Vec<SkillId> = self
            .build
            .required_bindings
            .iter()
            .copied()
            .filter(|skill| !snapshot.key_bindings.is_bound(*skill))
            .collect();
        if !missing.is_empty() {
            tracing::debug!(?missing, "missing required key bindings");
        }
        missing
    }

    /// Buffs to recast, limited to the bound ones.
    pub fn buff_skills(&self, snapshot: &Snapshot) -> Vec<SkillId> {
        let skills: Vec<SkillId> = self
            .build
            .buff_skills
            .iter()
            .copied()
            .filter(|skill| snapshot.key_bindings.is_bound(*skill))
            .collect();
        tracing::info!(?skills, "buff skills");
        skills
    }

    pub fn skills_to_bind(&self, snapshot: &Snapshot) -> SkillBar {
        let player = &snapshot.player;
        let learned = |skill: &SkillId| player.skill_level(*skill) > 0;

        let mut bindings: Vec<SkillId> = self
            .build
            .bind_rules
            .iter()
            .filter(|rule| player.level >= rule.from_level)
            .map(|rule| rule.skill)
            .collect();
        bindings.extend(self.build.attack_priority.iter().copied().find(learned));

        let main = self
            .build
            .main_skills
            .iter()
            .copied()
            .find(learned)
            .unwrap_or(SkillId::AttackSkill);

        tracing::info!(%main, ?bindings, "skills bound");
        SkillBar { main, bindings }
    }

    pub fn should_reset_skills(&self, snapshot: &Snapshot) -> bool {
        let Some(rule) = self.build.reset_rule else {
            return false;
        };
        let player = &snapshot.player;
        let reset =
            player.level >= rule.min_level && player.skill_level(rule.skill) > rule.max_points;
        if reset {
            tracing::info!(level = player.level, skill = %rule.skill, "resetting skills");
        }
        reset
    }

    pub fn stat_points(&self, snapshot: &Snapshot) -> BTreeMap<StatId, u32> {
        let points = self.build.stat_plan.for_level(snapshot.level());
        tracing::info!(level = snapshot.level(), ?points, "assigning stat points");
        points
    }

    pub fn skill_points(&self, snapshot: &Snapshot) -> &'a [SkillId] {
        self.build.skill_plan.for_level(snapshot.level())
    }

    pub fn precast_casts(&self, difficulty: Difficulty) -> u32 {
        self.build.combat.precast.casts_for(difficulty)
    }
}
