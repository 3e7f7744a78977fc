//! Skill and stat point plans keyed by level bracket.

use std::collections::BTreeMap;

use game_core::{SkillId, StatId};

/// A value that applies up to (but excluding) `below_level`. The last bracket
/// usually leaves `below_level` unset and covers every higher level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelBracket<T> {
    #[cfg_attr(feature = "serde", serde(default))]
    pub below_level: Option<u32>,
    pub value: T,
}

impl<T> LevelBracket<T> {
    pub fn below(level: u32, value: T) -> Self {
        Self {
            below_level: Some(level),
            value,
        }
    }

    pub fn rest(value: T) -> Self {
        Self {
            below_level: None,
            value,
        }
    }

    fn covers(&self, level: u32) -> bool {
        self.below_level.is_none_or(|limit| level < limit)
    }
}

fn bracket_for<T>(brackets: &[LevelBracket<T>], level: u32) -> Option<&T> {
    brackets
        .iter()
        .find(|bracket| bracket.covers(level))
        .map(|bracket| &bracket.value)
}

/// Ordered skill point spend sequences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillPointPlan(pub Vec<LevelBracket<Vec<SkillId>>>);

impl SkillPointPlan {
    /// Skill sequence for the character's current bracket; empty when no
    /// bracket covers the level.
    pub fn for_level(&self, level: u32) -> &[SkillId] {
        bracket_for(&self.0, level).map_or(&[], Vec::as_slice)
    }
}

/// Target stat values, filled in map order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatPointPlan(pub Vec<LevelBracket<BTreeMap<StatId, u32>>>);

impl StatPointPlan {
    pub fn for_level(&self, level: u32) -> BTreeMap<StatId, u32> {
        bracket_for(&self.0, level).cloned().unwrap_or_default()
    }
}
