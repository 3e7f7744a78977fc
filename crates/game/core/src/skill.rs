//! Skills, character stats and the skill → key binding table.

use std::collections::BTreeMap;
use std::fmt;

use crate::monster::Resist;

/// Skill identifiers used by the leveling builds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillId {
    /// Basic weapon attack, always available and free to use.
    AttackSkill,
    FireBolt,
    Warmth,
    FrozenArmor,
    StaticField,
    Telekinesis,
    FireBall,
    Inferno,
    Blaze,
    Teleport,
    EnergyShield,
    Blizzard,
    Meteor,
    FireMastery,
    TomeOfTownPortal,
}

impl SkillId {
    /// Damage kind the skill deals, if it deals damage at all.
    pub const fn element(self) -> Option<Resist> {
        match self {
            SkillId::AttackSkill => Some(Resist::Physical),
            SkillId::FireBolt
            | SkillId::FireBall
            | SkillId::Inferno
            | SkillId::Blaze
            | SkillId::Meteor => Some(Resist::Fire),
            SkillId::Blizzard => Some(Resist::Cold),
            SkillId::StaticField => Some(Resist::Lightning),
            SkillId::Warmth
            | SkillId::FrozenArmor
            | SkillId::Telekinesis
            | SkillId::Teleport
            | SkillId::EnergyShield
            | SkillId::FireMastery
            | SkillId::TomeOfTownPortal => None,
        }
    }
}

/// Allocatable character attributes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatId {
    Strength,
    Dexterity,
    Vitality,
    Energy,
}

/// Input trigger a skill is bound to (a key name as configured in game).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBinding(pub String);

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skills currently bound to an input. Re-read from every snapshot since the
/// player can rebind between sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings(BTreeMap<SkillId, KeyBinding>);

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn binding_for(&self, skill: SkillId) -> Option<&KeyBinding> {
        self.0.get(&skill)
    }

    pub fn is_bound(&self, skill: SkillId) -> bool {
        self.0.contains_key(&skill)
    }

    pub fn bind(&mut self, skill: SkillId, key: KeyBinding) -> Option<KeyBinding> {
        self.0.insert(skill, key)
    }

    pub fn unbind(&mut self, skill: SkillId) -> Option<KeyBinding> {
        self.0.remove(&skill)
    }

    pub fn skills(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(SkillId, KeyBinding)> for KeyBindings {
    fn from_iter<T: IntoIterator<Item = (SkillId, KeyBinding)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
