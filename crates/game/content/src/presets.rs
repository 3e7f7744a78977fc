//! Built-in content used when no data directory is configured.

use std::collections::BTreeMap;
use std::iter;
use std::time::Duration;

use game_core::{Area, DistanceEnvelope, MonsterType, NpcId, Position, SkillId, StatId, TravelMode};

use crate::bosses::{BossId, BossProfile, BossTable, BossTargeting, RouteLeg};
use crate::build::{BindRule, CharacterBuild, SkillResetRule};
use crate::gates::{LevelGate, LevelGateTable};
use crate::plans::{LevelBracket, SkillPointPlan, StatPointPlan};
use crate::technique::{CombatProfile, PrecastProfile, PrimaryTechnique, TechniqueDescriptor};

const RANGED: DistanceEnvelope = DistanceEnvelope::new(25, 30);
const MELEE: DistanceEnvelope = DistanceEnvelope::new(1, 3);

/// Where the agent stands when it engages Andariel.
pub const ANDARIEL_ATTACK_POSITION: Position = Position::new(22547, 9591);

/// Spot on Arreat Summit the ancients are fought from.
pub const ANCIENTS_TACTICAL_POSITION: Position = Position::new(10062, 12639);

fn repeat(skill: SkillId, times: usize) -> impl Iterator<Item = SkillId> {
    iter::repeat_n(skill, times)
}

/// Act 1 zone gates: [3, 6, 7, 9, 12, 18].
pub fn act1_gates() -> LevelGateTable {
    LevelGateTable::preset(vec![
        LevelGate::clear(Area::BloodMoor, TravelMode::Walk, 3),
        LevelGate::clear(Area::ColdPlains, TravelMode::Walk, 6),
        LevelGate::clear(Area::StonyField, TravelMode::Waypoint, 7),
        LevelGate::clear(Area::DarkWood, TravelMode::Waypoint, 9),
        LevelGate::clear(Area::BlackMarsh, TravelMode::Waypoint, 12),
        LevelGate::boss(BossId::Countess, 18),
    ])
}

fn fire_combat() -> CombatProfile {
    CombatProfile {
        max_attack_loops: 10,
        low_mana_percent: 15,
        early_level: 15,
        primary: PrimaryTechnique {
            envelope: MELEE,
            casts: 1,
            melee: false,
        },
        chain: vec![
            TechniqueDescriptor::new(SkillId::Blizzard, RANGED, 1),
            TechniqueDescriptor::new(SkillId::Meteor, RANGED, 1),
            TechniqueDescriptor::new(SkillId::FireBall, RANGED, 4),
            TechniqueDescriptor::new(SkillId::FireBolt, RANGED, 4),
        ],
        precast: PrecastProfile {
            skill: SkillId::StaticField,
            casts_normal: 8,
            casts_other: 6,
        },
    }
}

fn fire_skill_plan() -> SkillPointPlan {
    let early = [
        SkillId::FireBolt,
        SkillId::FireBolt,
        SkillId::FireBolt,
        SkillId::FrozenArmor,
        SkillId::FireBolt,
        SkillId::StaticField,
        SkillId::FireBolt,
        SkillId::Warmth,
        SkillId::FireBolt,
        SkillId::Telekinesis,
    ]
    .into_iter()
    .chain(repeat(SkillId::FireBolt, 4))
    .chain(repeat(SkillId::FireBall, 3))
    .chain(iter::once(SkillId::Teleport))
    .chain(repeat(SkillId::FireBall, 5))
    .collect();

    let late = [
        SkillId::FireBolt,
        SkillId::Warmth,
        SkillId::Inferno,
        SkillId::Blaze,
    ]
    .into_iter()
    .chain(repeat(SkillId::FireBall, 20))
    .chain([SkillId::Meteor, SkillId::FireMastery])
    .chain(repeat(SkillId::Meteor, 19))
    .chain(repeat(SkillId::FireMastery, 15))
    .collect();

    SkillPointPlan(vec![LevelBracket::below(24, early), LevelBracket::rest(late)])
}

fn fire_stat_plan() -> StatPointPlan {
    StatPointPlan(vec![
        LevelBracket::below(7, BTreeMap::from([(StatId::Vitality, 9999)])),
        LevelBracket::rest(BTreeMap::from([(StatId::Energy, 50)])),
    ])
}

/// Fire sorceress leveling build.
pub fn sorceress_leveling_fire() -> CharacterBuild {
    CharacterBuild {
        name: "sorceress_leveling_fire".to_string(),
        required_bindings: vec![SkillId::TomeOfTownPortal],
        buff_skills: vec![SkillId::FrozenArmor, SkillId::EnergyShield],
        bind_rules: vec![
            BindRule {
                from_level: 1,
                skill: SkillId::TomeOfTownPortal,
            },
            BindRule {
                from_level: 4,
                skill: SkillId::FrozenArmor,
            },
            BindRule {
                from_level: 6,
                skill: SkillId::StaticField,
            },
            BindRule {
                from_level: 18,
                skill: SkillId::Teleport,
            },
        ],
        attack_priority: vec![
            SkillId::Blizzard,
            SkillId::Meteor,
            SkillId::FireBall,
            SkillId::FireBolt,
        ],
        main_skills: vec![SkillId::Blizzard, SkillId::Meteor],
        reset_rule: Some(SkillResetRule {
            min_level: 24,
            skill: SkillId::FireBall,
            max_points: 1,
        }),
        stat_plan: fire_stat_plan(),
        skill_plan: fire_skill_plan(),
        combat: fire_combat(),
        level_gates: act1_gates(),
    }
}

/// Boss procedures for every named kill entry point.
pub fn boss_table() -> BossTable {
    let static_close = DistanceEnvelope::new(1, 5);

    BossTable::preset(vec![
        BossProfile::single(BossId::Countess, NpcId::DarkStalker, MonsterType::SuperUnique)
            .with_route([
                RouteLeg::new(Area::BlackMarsh, TravelMode::Waypoint),
                RouteLeg::new(Area::ForgottenTower, TravelMode::Walk),
                RouteLeg::new(Area::TowerCellarLevel5, TravelMode::Walk),
            ]),
        BossProfile::single(BossId::Andariel, NpcId::Andariel, MonsterType::Unique),
        BossProfile::single(BossId::Summoner, NpcId::Summoner, MonsterType::Unique),
        BossProfile::single(BossId::Duriel, NpcId::Duriel, MonsterType::Unique)
            .with_precast(static_close),
        BossProfile {
            id: BossId::Council,
            targeting: BossTargeting::Nearest {
                names: vec![
                    NpcId::CouncilMember,
                    NpcId::CouncilMember2,
                    NpcId::CouncilMember3,
                ],
            },
            route: Vec::new(),
            precast: None,
            engagement: None,
            skip_on_immunities: Vec::new(),
            spawn_wait_ms: 0,
        },
        BossProfile::single(BossId::Mephisto, NpcId::Mephisto, MonsterType::Unique),
        BossProfile::single(BossId::Izual, NpcId::Izual, MonsterType::Unique)
            .with_precast(static_close),
        BossProfile::single(BossId::Diablo, NpcId::Diablo, MonsterType::Unique)
            .with_precast(static_close)
            .with_spawn_wait(Duration::from_secs(20)),
        BossProfile::single(
            BossId::Pindleskin,
            NpcId::DefiledWarrior,
            MonsterType::SuperUnique,
        ),
        BossProfile::single(BossId::Nihlathak, NpcId::Nihlathak, MonsterType::SuperUnique),
        BossProfile {
            id: BossId::Ancients,
            targeting: BossTargeting::Sequential {
                names: vec![
                    NpcId::TalicTheDefender,
                    NpcId::MadawcTheGuardian,
                    NpcId::KorlicTheProtector,
                ],
                kind: MonsterType::SuperUnique,
                tactical_position: ANCIENTS_TACTICAL_POSITION,
            },
            route: Vec::new(),
            precast: Some(DistanceEnvelope::new(8, 10)),
            engagement: None,
            skip_on_immunities: Vec::new(),
            spawn_wait_ms: 0,
        },
        BossProfile::single(BossId::Baal, NpcId::BaalCrab, MonsterType::Unique)
            .with_precast(DistanceEnvelope::new(1, 4)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn act1_thresholds_are_the_documented_ones() {
        let gates = act1_gates();
        let thresholds: Vec<u32> = gates.thresholds().collect();
        assert_eq!(thresholds, vec![3, 6, 7, 9, 12, 18]);
        assert!(LevelGateTable::new(gates.gates().to_vec()).is_ok());
    }

    #[test]
    fn presets_pass_validation() {
        let build = sorceress_leveling_fire();
        assert!(build.validate().is_ok());
        let bosses: Vec<BossProfile> = boss_table().into();
        assert!(BossTable::new(bosses).is_ok());
    }

    #[test]
    fn late_skill_plan_has_expected_length() {
        let plan = fire_skill_plan();
        assert_eq!(plan.for_level(30).len(), 4 + 20 + 2 + 19 + 15);
    }
}
